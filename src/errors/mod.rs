//! Error types for the Watson client.
//!
//! Two layers: [`ModelError`] covers the model (de)serialization contract and
//! [`WatsonError`] covers everything a service-client caller can observe,
//! including model errors raised while decoding a service response.

use thiserror::Error;

/// Result type alias for model (de)serialization.
pub type ModelResult<T> = Result<T, ModelError>;

/// Result type alias for client operations.
pub type WatsonResult<T> = Result<T, WatsonError>;

/// Failure to reconstruct a model from a JSON mapping.
///
/// Every variant is fatal to the `from_dict` call that raised it. No partially
/// built model is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A required field was absent from the input mapping.
    #[error("Required property '{field}' not present in {model} JSON")]
    MissingRequiredField {
        /// Target model type.
        model: &'static str,
        /// JSON key of the missing field.
        field: &'static str,
    },

    /// A closed model received keys outside its declared field set.
    #[error("Unrecognized keys detected in dictionary for {model}: {}", .keys.join(", "))]
    SchemaViolation {
        /// Target model type.
        model: &'static str,
        /// Offending keys, sorted.
        keys: Vec<String>,
    },

    /// A field value did not have the declared JSON shape.
    #[error("Invalid value for property '{field}' in {model} JSON: {message}")]
    InvalidField {
        /// Target model type.
        model: &'static str,
        /// JSON key of the offending field.
        field: &'static str,
        /// Decoder message.
        message: String,
    },

    /// A model position held something other than a JSON object.
    #[error("Expected a JSON object for {model}, found {found}")]
    NotAnObject {
        /// Target model type.
        model: &'static str,
        /// JSON type that was found instead.
        found: &'static str,
    },
}

impl ModelError {
    /// Creates a missing required field error.
    pub fn missing(model: &'static str, field: &'static str) -> Self {
        ModelError::MissingRequiredField { model, field }
    }

    /// Creates a schema violation error, sorting the keys.
    pub fn schema_violation(model: &'static str, keys: impl IntoIterator<Item = String>) -> Self {
        let mut keys: Vec<String> = keys.into_iter().collect();
        keys.sort();
        ModelError::SchemaViolation { model, keys }
    }

    /// Creates an invalid field error.
    pub fn invalid(model: &'static str, field: &'static str, message: impl Into<String>) -> Self {
        ModelError::InvalidField {
            model,
            field,
            message: message.into(),
        }
    }

    /// Returns the model type the error was raised for.
    pub fn model(&self) -> &'static str {
        match self {
            ModelError::MissingRequiredField { model, .. }
            | ModelError::SchemaViolation { model, .. }
            | ModelError::InvalidField { model, .. }
            | ModelError::NotAnObject { model, .. } => model,
        }
    }

    /// Returns true if the error indicates the service added keys this
    /// client does not know about.
    pub fn is_schema_violation(&self) -> bool {
        matches!(self, ModelError::SchemaViolation { .. })
    }
}

/// Error type for Watson client operations.
#[derive(Debug, Error)]
pub enum WatsonError {
    /// Configuration error (bad service URL, version date, etc.).
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message describing the configuration issue.
        message: String,
    },

    /// Authentication error (missing or invalid credentials).
    #[error("Authentication failed: {message}")]
    Authentication {
        /// Error message describing the credential issue.
        message: String,
    },

    /// The service answered with a shape this client cannot map onto its
    /// models, which in practice means client/service version skew.
    #[error("The service returned a response shape this client version does not understand: {source}")]
    ResponseShape {
        /// The underlying model error.
        #[source]
        source: ModelError,
    },

    /// The service returned a non-success status.
    #[error("Watson API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message extracted from the response body.
        message: String,
        /// Service error code, when the body carries one.
        code: Option<String>,
    },

    /// Serialization/deserialization error (body is not valid JSON).
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message.
        message: String,
    },
}

impl WatsonError {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        WatsonError::Configuration {
            message: message.into(),
        }
    }

    /// Creates an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        WatsonError::Authentication {
            message: message.into(),
        }
    }

    /// Returns true if this error was caused by client/service version skew.
    pub fn is_version_skew(&self) -> bool {
        matches!(self, WatsonError::ResponseShape { .. })
    }

    /// Returns the HTTP status for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            WatsonError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<ModelError> for WatsonError {
    fn from(source: ModelError) -> Self {
        WatsonError::ResponseShape { source }
    }
}

impl From<serde_json::Error> for WatsonError {
    fn from(err: serde_json::Error) -> Self {
        WatsonError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<url::ParseError> for WatsonError {
    fn from(err: url::ParseError) -> Self {
        WatsonError::Configuration {
            message: format!("Invalid URL: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let error = ModelError::missing("CaptureGroup", "group");
        assert_eq!(
            error.to_string(),
            "Required property 'group' not present in CaptureGroup JSON"
        );
        assert_eq!(error.model(), "CaptureGroup");
    }

    #[test]
    fn test_schema_violation_sorts_keys() {
        let error = ModelError::schema_violation(
            "RuntimeIntent",
            vec!["zeta".to_string(), "alpha".to_string()],
        );

        assert!(error.is_schema_violation());
        if let ModelError::SchemaViolation { keys, .. } = &error {
            assert_eq!(keys, &vec!["alpha".to_string(), "zeta".to_string()]);
        } else {
            panic!("Expected SchemaViolation");
        }
        assert!(error.to_string().ends_with("RuntimeIntent: alpha, zeta"));
    }

    #[test]
    fn test_model_error_becomes_version_skew() {
        let error: WatsonError = ModelError::missing("MessageResponse", "output").into();
        assert!(error.is_version_skew());
        assert!(error
            .to_string()
            .contains("response shape this client version does not understand"));
    }

    #[test]
    fn test_api_error_status() {
        let error = WatsonError::Api {
            status: 404,
            message: "Resource not found".to_string(),
            code: None,
        };
        assert_eq!(error.status(), Some(404));
        assert!(!error.is_version_skew());
        assert_eq!(WatsonError::configuration("x").status(), None);
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error: WatsonError = err.into();
        assert!(matches!(error, WatsonError::Serialization { .. }));
    }
}
