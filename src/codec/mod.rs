//! Wire encoding for models.
//!
//! The transport layer hands over raw body bytes; these helpers parse them
//! into JSON, run the model's `from_dict`, and map every failure onto
//! [`WatsonError`]. Encoding always produces compact JSON.

use serde_json::Value;
use tracing::debug;

use crate::errors::{WatsonError, WatsonResult};
use crate::model::Model;

/// Decodes a model from a JSON response body.
pub fn from_slice<M: Model>(body: &[u8]) -> WatsonResult<M> {
    let value: Value = serde_json::from_slice(body)?;
    from_value(value)
}

/// Decodes a model from a JSON string.
pub fn from_str<M: Model>(body: &str) -> WatsonResult<M> {
    let value: Value = serde_json::from_str(body)?;
    from_value(value)
}

/// Decodes a model from an already-parsed JSON value.
pub fn from_value<M: Model>(value: Value) -> WatsonResult<M> {
    let model = M::from_value(value)?;
    debug!(model = M::NAME, "Decoded service payload");
    Ok(model)
}

/// Encodes a model as a compact JSON body.
pub fn to_vec<M: Model>(model: &M) -> WatsonResult<Vec<u8>> {
    Ok(serde_json::to_vec(&model.to_dict())?)
}

/// Encodes a model as a compact JSON string.
pub fn to_string<M: Model>(model: &M) -> WatsonResult<String> {
    Ok(serde_json::to_string(&model.to_dict())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ModelError;
    use crate::types::assistant_v2::{RuntimeIntent, SessionResponse};

    #[test]
    fn test_from_slice() {
        let session: SessionResponse = from_slice(br#"{"session_id": "abc-123"}"#).unwrap();
        assert_eq!(session.session_id, "abc-123");
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let error = from_str::<SessionResponse>("{\"session_id\": ").unwrap_err();
        assert!(matches!(error, WatsonError::Serialization { .. }));
    }

    #[test]
    fn test_model_error_is_response_shape() {
        let error = from_str::<SessionResponse>(r#"{"session": "abc"}"#).unwrap_err();
        match error {
            WatsonError::ResponseShape { source } => {
                assert_eq!(
                    source,
                    ModelError::SchemaViolation {
                        model: "SessionResponse",
                        keys: vec!["session".to_string()],
                    }
                );
            }
            other => panic!("Expected ResponseShape, got {other:?}"),
        }
    }

    #[test]
    fn test_to_string_is_compact() {
        let intent = RuntimeIntent::new("hello", 0.87);
        assert_eq!(
            to_string(&intent).unwrap(),
            r#"{"intent":"hello","confidence":0.87}"#
        );
        assert_eq!(to_vec(&intent).unwrap(), to_string(&intent).unwrap().into_bytes());
    }
}
