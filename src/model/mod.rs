//! The generated-model contract.
//!
//! Every Watson schema type implements [`Model`]: a symmetric pair of
//! `from_dict` / `to_dict` conversions between the typed value and a JSON
//! mapping. Models come in two shapes:
//!
//! - **closed** models reject keys outside their declared field set with
//!   [`ModelError::SchemaViolation`], surfacing service drift early;
//! - **open** models keep every undeclared key in an explicit residual map
//!   and re-emit it verbatim after the declared fields.
//!
//! Required fields missing from the input fail with
//! [`ModelError::MissingRequiredField`]. Optional fields that were never set
//! are omitted from the output, never written as `null`.
//!
//! Implementations are written with [`DictReader`] and [`DictWriter`], which
//! carry the shared key-checking, presence and recursion rules so each model
//! only lists its fields.
//!
//! ```rust
//! use watson_client::model::Model;
//! use watson_client::types::assistant_v2::RuntimeIntent;
//!
//! let value = serde_json::json!({"intent": "hello", "confidence": 0.87});
//! let intent = RuntimeIntent::from_value(value.clone()).unwrap();
//! assert_eq!(intent.intent, "hello");
//! assert_eq!(intent.to_value(), value);
//! ```

mod enums;
mod reader;
mod writer;

pub use reader::DictReader;
pub use writer::DictWriter;

use serde_json::Value;

use crate::errors::{ModelError, ModelResult};

/// A JSON object, with keys kept in insertion order.
pub type JsonMap = serde_json::Map<String, Value>;

/// Whether a model tolerates undeclared keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Undeclared keys are a deserialization error.
    Closed,
    /// Undeclared keys are collected into a residual map.
    Open,
}

/// A typed mirror of one Watson JSON schema.
pub trait Model: Sized {
    /// Type name used in error messages.
    const NAME: &'static str;

    /// Declared JSON keys, in declaration order.
    const FIELDS: &'static [&'static str];

    /// Whether undeclared keys are rejected or kept.
    const SHAPE: Shape = Shape::Closed;

    /// Builds an instance from a JSON mapping.
    fn from_dict(dict: JsonMap) -> ModelResult<Self>;

    /// Converts the instance into a JSON mapping.
    fn to_dict(&self) -> JsonMap;

    /// Builds an instance from any JSON value, which must be an object.
    fn from_value(value: Value) -> ModelResult<Self> {
        match value {
            Value::Object(dict) => Self::from_dict(dict),
            other => Err(ModelError::NotAnObject {
                model: Self::NAME,
                found: json_type_name(&other),
            }),
        }
    }

    /// Converts the instance into a JSON object value.
    fn to_value(&self) -> Value {
        Value::Object(self.to_dict())
    }

    /// Pretty-printed JSON rendering, for logs and debugging.
    fn to_pretty_string(&self) -> String {
        serde_json::to_string_pretty(&self.to_dict()).unwrap_or_default()
    }
}

/// Name of a JSON value's type, for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Implements `Display`, `Serialize` and `Deserialize` for a [`Model`] by
/// routing through its `to_dict` / `from_dict`.
///
/// `Display` renders pretty-printed JSON. The serde impls let models nest in
/// ordinary serde types and decode straight from `serde_json::from_str`.
#[macro_export]
macro_rules! model_traits {
    ($($model:ty),+ $(,)?) => {
        $(
            impl ::std::fmt::Display for $model {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str(&$crate::model::Model::to_pretty_string(self))
                }
            }

            impl $crate::__private::serde::Serialize for $model {
                fn serialize<S: $crate::__private::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    $crate::__private::serde::Serialize::serialize(&$crate::model::Model::to_dict(self), serializer)
                }
            }

            impl<'de> $crate::__private::serde::Deserialize<'de> for $model {
                fn deserialize<D: $crate::__private::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let dict = <$crate::model::JsonMap as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                    <$model as $crate::model::Model>::from_dict(dict).map_err($crate::__private::serde::de::Error::custom)
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    /// Minimal closed model exercising every field shape.
    #[derive(Debug, Clone, PartialEq)]
    struct Sample {
        name: String,
        kind: Option<String>,
        flag: Option<bool>,
        child: Option<Leaf>,
        children: Option<Vec<Leaf>>,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Leaf {
        id: i64,
    }

    impl Model for Leaf {
        const NAME: &'static str = "Leaf";
        const FIELDS: &'static [&'static str] = &["id"];

        fn from_dict(dict: JsonMap) -> ModelResult<Self> {
            let mut reader = DictReader::new::<Self>(dict)?;
            Ok(Self {
                id: reader.required("id")?,
            })
        }

        fn to_dict(&self) -> JsonMap {
            DictWriter::new().field("id", &self.id).finish()
        }
    }

    impl Model for Sample {
        const NAME: &'static str = "Sample";
        const FIELDS: &'static [&'static str] = &["name", "type", "flag", "child", "children"];

        fn from_dict(dict: JsonMap) -> ModelResult<Self> {
            let mut reader = DictReader::new::<Self>(dict)?;
            Ok(Self {
                name: reader.required("name")?,
                kind: reader.optional("type")?,
                flag: reader.optional("flag")?,
                child: reader.optional_model("child")?,
                children: reader.optional_models("children")?,
            })
        }

        fn to_dict(&self) -> JsonMap {
            DictWriter::new()
                .field("name", &self.name)
                .optional("type", &self.kind)
                .optional("flag", &self.flag)
                .optional_model("child", &self.child)
                .optional_models("children", &self.children)
                .finish()
        }
    }

    model_traits!(Sample);

    fn sample(value: Value) -> ModelResult<Sample> {
        Sample::from_value(value)
    }

    #[test]
    fn test_renamed_key_round_trip() {
        let value = json!({"name": "n", "type": "server"});
        let parsed = sample(value.clone()).unwrap();
        assert_eq!(parsed.kind.as_deref(), Some("server"));
        assert_eq!(parsed.to_value(), value);
    }

    #[test]
    fn test_falsy_values_are_emitted() {
        let parsed = sample(json!({"name": "", "flag": false})).unwrap();
        assert_eq!(parsed.to_value(), json!({"name": "", "flag": false}));
    }

    #[test]
    fn test_emission_follows_declaration_order() {
        let parsed = sample(json!({"flag": true, "type": "t", "name": "n"})).unwrap();
        let dict = parsed.to_dict();
        let keys: Vec<&str> = dict.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "type", "flag"]);
    }

    #[test]
    fn test_nested_failure_fails_outer() {
        let error = sample(json!({
            "name": "n",
            "children": [{"id": 1}, {}, {"id": 3}]
        }))
        .unwrap_err();

        assert_eq!(error, ModelError::missing("Leaf", "id"));
    }

    #[test]
    fn test_non_object_rejected() {
        let error = Sample::from_value(json!([1, 2])).unwrap_err();
        assert_eq!(
            error,
            ModelError::NotAnObject {
                model: "Sample",
                found: "array"
            }
        );
    }

    #[test]
    fn test_display_is_pretty_json() {
        let parsed = sample(json!({"name": "n", "child": {"id": 7}})).unwrap();
        assert_eq!(
            parsed.to_string(),
            "{\n  \"name\": \"n\",\n  \"child\": {\n    \"id\": 7\n  }\n}"
        );
    }

    #[test]
    fn test_serde_bridge() {
        let parsed: Sample = serde_json::from_str(r#"{"name": "n", "flag": true}"#).unwrap();
        assert_eq!(parsed.flag, Some(true));
        assert_eq!(
            serde_json::to_string(&parsed).unwrap(),
            r#"{"name":"n","flag":true}"#
        );

        let error = serde_json::from_str::<Sample>(r#"{"flag": true}"#).unwrap_err();
        assert!(error.to_string().contains("Required property 'name'"));
    }
}
