//! Declared-field extraction for `from_dict`.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{json_type_name, JsonMap, Model, Shape};
use crate::errors::{ModelError, ModelResult};

/// Consumes a JSON mapping one declared field at a time.
///
/// Construction checks the key set against the model's declaration (closed
/// models only). Each `required*` / `optional*` call then removes its key, so
/// whatever remains at the end is the residual map of an open model.
///
/// A key holding JSON `null` counts as absent, except for
/// [`required_value`](Self::required_value).
#[derive(Debug)]
pub struct DictReader {
    model: &'static str,
    dict: JsonMap,
}

impl DictReader {
    /// Starts reading `dict` as an instance of `M`.
    ///
    /// Fails with [`ModelError::SchemaViolation`] when `M` is closed and the
    /// mapping carries undeclared keys.
    pub fn new<M: Model>(dict: JsonMap) -> ModelResult<Self> {
        if M::SHAPE == Shape::Closed {
            let unknown: Vec<String> = dict
                .keys()
                .filter(|key| !M::FIELDS.contains(&key.as_str()))
                .cloned()
                .collect();

            if !unknown.is_empty() {
                let error = ModelError::schema_violation(M::NAME, unknown);
                tracing::warn!(model = M::NAME, %error, "Unrecognized keys in service payload");
                return Err(error);
            }
        }

        Ok(Self {
            model: M::NAME,
            dict,
        })
    }

    fn take(&mut self, key: &str) -> Option<Value> {
        match self.dict.shift_remove(key) {
            Some(Value::Null) | None => None,
            Some(value) => Some(value),
        }
    }

    fn decode<T: DeserializeOwned>(&self, key: &'static str, value: Value) -> ModelResult<T> {
        serde_json::from_value(value).map_err(|e| ModelError::invalid(self.model, key, e.to_string()))
    }

    fn decode_models<M: Model>(&self, key: &'static str, value: Value) -> ModelResult<Vec<M>> {
        match value {
            Value::Array(items) => items.into_iter().map(M::from_value).collect(),
            other => Err(ModelError::invalid(
                self.model,
                key,
                format!("expected an array, found {}", json_type_name(&other)),
            )),
        }
    }

    /// Reads a required scalar, sequence or open-mapping field.
    pub fn required<T: DeserializeOwned>(&mut self, key: &'static str) -> ModelResult<T> {
        let value = self.take(key).ok_or(ModelError::missing(self.model, key))?;
        self.decode(key, value)
    }

    /// Reads a required field holding any JSON value.
    ///
    /// Only a missing key fails; a present `null` is returned as is.
    pub fn required_value(&mut self, key: &'static str) -> ModelResult<Value> {
        self.dict
            .shift_remove(key)
            .ok_or(ModelError::missing(self.model, key))
    }

    /// Reads an optional scalar, sequence or open-mapping field.
    pub fn optional<T: DeserializeOwned>(&mut self, key: &'static str) -> ModelResult<Option<T>> {
        self.take(key).map(|value| self.decode(key, value)).transpose()
    }

    /// Reads a required nested model.
    pub fn required_model<M: Model>(&mut self, key: &'static str) -> ModelResult<M> {
        let value = self.take(key).ok_or(ModelError::missing(self.model, key))?;
        M::from_value(value)
    }

    /// Reads an optional nested model.
    pub fn optional_model<M: Model>(&mut self, key: &'static str) -> ModelResult<Option<M>> {
        self.take(key).map(M::from_value).transpose()
    }

    /// Reads a required sequence of nested models.
    ///
    /// Every element is decoded independently; the first failing element fails
    /// the whole read.
    pub fn required_models<M: Model>(&mut self, key: &'static str) -> ModelResult<Vec<M>> {
        let value = self.take(key).ok_or(ModelError::missing(self.model, key))?;
        self.decode_models(key, value)
    }

    /// Reads an optional sequence of nested models.
    pub fn optional_models<M: Model>(&mut self, key: &'static str) -> ModelResult<Option<Vec<M>>> {
        self.take(key)
            .map(|value| self.decode_models(key, value))
            .transpose()
    }

    /// Returns every key not consumed so far, in input order.
    pub fn into_residual(self) -> JsonMap {
        self.dict
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug)]
    struct Closed;

    impl Model for Closed {
        const NAME: &'static str = "Closed";
        const FIELDS: &'static [&'static str] = &["a", "b"];

        fn from_dict(_dict: JsonMap) -> ModelResult<Self> {
            Ok(Closed)
        }

        fn to_dict(&self) -> JsonMap {
            JsonMap::new()
        }
    }

    struct Open;

    impl Model for Open {
        const NAME: &'static str = "Open";
        const FIELDS: &'static [&'static str] = &["a"];
        const SHAPE: Shape = Shape::Open;

        fn from_dict(_dict: JsonMap) -> ModelResult<Self> {
            Ok(Open)
        }

        fn to_dict(&self) -> JsonMap {
            JsonMap::new()
        }
    }

    fn dict(value: Value) -> JsonMap {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_closed_rejects_unknown_keys() {
        let error = DictReader::new::<Closed>(dict(json!({"a": 1, "z": 2, "y": 3}))).unwrap_err();
        assert_eq!(
            error,
            ModelError::SchemaViolation {
                model: "Closed",
                keys: vec!["y".to_string(), "z".to_string()],
            }
        );
    }

    #[test]
    fn test_open_keeps_residual_in_order() {
        let mut reader = DictReader::new::<Open>(dict(json!({"z": 1, "a": "x", "b": [2]}))).unwrap();
        let a: String = reader.required("a").unwrap();
        assert_eq!(a, "x");

        let residual = reader.into_residual();
        let keys: Vec<&str> = residual.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "b"]);
        assert_eq!(residual["b"], json!([2]));
    }

    #[test]
    fn test_null_counts_as_absent() {
        let mut reader = DictReader::new::<Closed>(dict(json!({"a": null}))).unwrap();
        assert_eq!(reader.optional::<String>("a").unwrap(), None);

        let mut reader = DictReader::new::<Closed>(dict(json!({"a": null}))).unwrap();
        assert_eq!(
            reader.required::<String>("a").unwrap_err(),
            ModelError::missing("Closed", "a")
        );
    }

    #[test]
    fn test_required_value_keeps_present_null() {
        let mut reader = DictReader::new::<Closed>(dict(json!({"a": null}))).unwrap();
        assert_eq!(reader.required_value("a").unwrap(), Value::Null);
        assert_eq!(
            reader.required_value("b").unwrap_err(),
            ModelError::missing("Closed", "b")
        );
    }

    #[test]
    fn test_wrong_scalar_type_is_invalid_field() {
        let mut reader = DictReader::new::<Closed>(dict(json!({"a": "one"}))).unwrap();
        let error = reader.required::<f64>("a").unwrap_err();
        assert!(matches!(
            error,
            ModelError::InvalidField {
                model: "Closed",
                field: "a",
                ..
            }
        ));
    }

    #[test]
    fn test_model_sequence_must_be_array() {
        let mut reader = DictReader::new::<Closed>(dict(json!({"b": {"a": 1}}))).unwrap();
        let error = reader.optional_models::<Closed>("b").unwrap_err();
        assert!(error.to_string().contains("expected an array, found object"));
    }
}
