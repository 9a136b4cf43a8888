//! Declaration-ordered emission for `to_dict`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use super::{JsonMap, Model};

/// Builds a JSON mapping field by field, in call order.
///
/// Optional fields holding `None` are skipped entirely; set fields are always
/// written, whatever their value.
#[derive(Debug, Default)]
#[must_use]
pub struct DictWriter {
    dict: JsonMap,
}

impl DictWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a required scalar, sequence or open-mapping field.
    pub fn field<T: Clone + Into<Value>>(mut self, key: &str, value: &T) -> Self {
        self.dict.insert(key.to_string(), value.clone().into());
        self
    }

    /// Writes an optional field when it is set.
    pub fn optional<T: Clone + Into<Value>>(self, key: &str, value: &Option<T>) -> Self {
        match value {
            Some(value) => self.field(key, value),
            None => self,
        }
    }

    /// Writes a timestamp as RFC 3339 in UTC.
    ///
    /// At least millisecond precision is written; finer fractions are kept
    /// as micro- or nanoseconds.
    pub fn datetime(mut self, key: &str, value: &DateTime<Utc>) -> Self {
        let format = if value.timestamp_subsec_nanos() % 1_000_000 == 0 {
            SecondsFormat::Millis
        } else {
            SecondsFormat::AutoSi
        };
        self.dict.insert(
            key.to_string(),
            Value::String(value.to_rfc3339_opts(format, true)),
        );
        self
    }

    /// Writes an optional timestamp when it is set.
    pub fn optional_datetime(self, key: &str, value: &Option<DateTime<Utc>>) -> Self {
        match value {
            Some(value) => self.datetime(key, value),
            None => self,
        }
    }

    /// Writes a required nested model.
    pub fn model<M: Model>(mut self, key: &str, value: &M) -> Self {
        self.dict.insert(key.to_string(), value.to_value());
        self
    }

    /// Writes an optional nested model when it is set.
    pub fn optional_model<M: Model>(self, key: &str, value: &Option<M>) -> Self {
        match value {
            Some(value) => self.model(key, value),
            None => self,
        }
    }

    /// Writes a required sequence of nested models.
    pub fn models<M: Model>(mut self, key: &str, values: &[M]) -> Self {
        let items = values.iter().map(Model::to_value).collect();
        self.dict.insert(key.to_string(), Value::Array(items));
        self
    }

    /// Writes an optional sequence of nested models when it is set.
    pub fn optional_models<M: Model>(self, key: &str, values: &Option<Vec<M>>) -> Self {
        match values {
            Some(values) => self.models(key, values),
            None => self,
        }
    }

    /// Appends the residual map of an open model.
    ///
    /// Entries whose key was already written are skipped so declared fields
    /// keep their typed value.
    pub fn residual(mut self, residual: &JsonMap) -> Self {
        for (key, value) in residual {
            if !self.dict.contains_key(key) {
                self.dict.insert(key.clone(), value.clone());
            }
        }
        self
    }

    /// Returns the finished mapping.
    pub fn finish(self) -> JsonMap {
        self.dict
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_none_is_omitted() {
        let dict = DictWriter::new()
            .field("a", &1_i64)
            .optional::<String>("b", &None)
            .optional("c", &Some(0.0_f64))
            .finish();
        assert_eq!(Value::Object(dict), json!({"a": 1, "c": 0.0}));
    }

    #[test]
    fn test_residual_does_not_override_declared() {
        let mut residual = JsonMap::new();
        residual.insert("a".to_string(), json!("shadow"));
        residual.insert("x".to_string(), json!({"nested": true}));

        let dict = DictWriter::new()
            .field("a", &"typed".to_string())
            .residual(&residual)
            .finish();
        assert_eq!(Value::Object(dict), json!({"a": "typed", "x": {"nested": true}}));
    }

    #[test]
    fn test_datetime_format() {
        let created = Utc.with_ymd_and_hms(2017, 3, 1, 12, 30, 0).unwrap();
        let dict = DictWriter::new().datetime("created", &created).finish();
        assert_eq!(dict["created"], json!("2017-03-01T12:30:00.000Z"));
    }

    #[test]
    fn test_datetime_keeps_sub_millisecond_digits() {
        let micros = Utc.with_ymd_and_hms(2016, 10, 21, 22, 27, 39).unwrap()
            + chrono::Duration::microseconds(123_456);
        let nanos = micros + chrono::Duration::nanoseconds(789);

        let dict = DictWriter::new()
            .datetime("micros", &micros)
            .datetime("nanos", &nanos)
            .finish();
        assert_eq!(dict["micros"], json!("2016-10-21T22:27:39.123456Z"));
        assert_eq!(dict["nanos"], json!("2016-10-21T22:27:39.123456789Z"));
    }
}
