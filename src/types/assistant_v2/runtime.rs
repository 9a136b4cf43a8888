//! Intents and entities recognized in user input.

use crate::errors::ModelResult;
use crate::model::{DictReader, DictWriter, JsonMap, Model};

/// A recognized capture group for an entity pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureGroup {
    /// A recognized capture group for the entity.
    pub group: String,
    /// Zero-based character offsets where the value begins and ends.
    pub location: Option<Vec<i64>>,
}

impl CaptureGroup {
    /// Creates a capture group.
    pub fn new(group: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            location: None,
        }
    }
}

impl Model for CaptureGroup {
    const NAME: &'static str = "CaptureGroup";
    const FIELDS: &'static [&'static str] = &["group", "location"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            group: reader.required("group")?,
            location: reader.optional("location")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .field("group", &self.group)
            .optional("location", &self.location)
            .finish()
    }
}

/// An entity value recognized in the user input.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeEntity {
    /// An entity detected in the input.
    pub entity: String,
    /// Zero-based character offsets where the detected value begins and ends.
    pub location: Vec<i64>,
    /// The term in the input text that was recognized as an entity value.
    pub value: String,
    /// Confidence in the recognized entity.
    pub confidence: Option<f64>,
    /// Any metadata for the entity.
    pub metadata: Option<JsonMap>,
    /// Capture groups, as defined by the entity pattern.
    pub groups: Option<Vec<CaptureGroup>>,
}

impl RuntimeEntity {
    /// Creates an entity with its required fields.
    pub fn new(entity: impl Into<String>, location: Vec<i64>, value: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            location,
            value: value.into(),
            confidence: None,
            metadata: None,
            groups: None,
        }
    }
}

impl Model for RuntimeEntity {
    const NAME: &'static str = "RuntimeEntity";
    const FIELDS: &'static [&'static str] = &[
        "entity",
        "location",
        "value",
        "confidence",
        "metadata",
        "groups",
    ];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            entity: reader.required("entity")?,
            location: reader.required("location")?,
            value: reader.required("value")?,
            confidence: reader.optional("confidence")?,
            metadata: reader.optional("metadata")?,
            groups: reader.optional_models("groups")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .field("entity", &self.entity)
            .field("location", &self.location)
            .field("value", &self.value)
            .optional("confidence", &self.confidence)
            .optional("metadata", &self.metadata)
            .optional_models("groups", &self.groups)
            .finish()
    }
}

/// An intent identified in the user input.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeIntent {
    /// The name of the recognized intent.
    pub intent: String,
    /// Confidence in the intent, between 0 and 1.
    pub confidence: f64,
}

impl RuntimeIntent {
    /// Creates an intent.
    pub fn new(intent: impl Into<String>, confidence: f64) -> Self {
        Self {
            intent: intent.into(),
            confidence,
        }
    }
}

impl Model for RuntimeIntent {
    const NAME: &'static str = "RuntimeIntent";
    const FIELDS: &'static [&'static str] = &["intent", "confidence"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            intent: reader.required("intent")?,
            confidence: reader.required("confidence")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .field("intent", &self.intent)
            .field("confidence", &self.confidence)
            .finish()
    }
}

crate::model_traits!(CaptureGroup, RuntimeEntity, RuntimeIntent);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ModelError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_intent_scenario() {
        let value = json!({"intent": "hello", "confidence": 0.87});
        let intent = RuntimeIntent::from_value(value.clone()).unwrap();

        assert_eq!(intent.intent, "hello");
        assert_eq!(intent.confidence, 0.87);
        assert_eq!(intent.to_value(), value);

        let keys: Vec<String> = intent.to_dict().keys().cloned().collect();
        assert_eq!(keys, vec!["intent", "confidence"]);
    }

    #[test]
    fn test_intent_requires_confidence() {
        let error = RuntimeIntent::from_value(json!({"intent": "hello"})).unwrap_err();
        assert_eq!(error, ModelError::missing("RuntimeIntent", "confidence"));
    }

    #[test]
    fn test_entity_with_groups() {
        let value = json!({
            "entity": "phone",
            "location": [10, 22],
            "value": "us",
            "confidence": 1.0,
            "metadata": {"source": "pattern"},
            "groups": [
                {"group": "area", "location": [10, 13]},
                {"group": "number"}
            ]
        });

        let entity = RuntimeEntity::from_value(value.clone()).unwrap();
        let groups = entity.groups.as_ref().unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].location, Some(vec![10, 13]));
        assert_eq!(groups[1], CaptureGroup::new("number"));
        assert_eq!(entity.to_value(), value);
    }

    #[test]
    fn test_entity_group_failure_fails_entity() {
        let error = RuntimeEntity::from_value(json!({
            "entity": "phone",
            "location": [0, 4],
            "value": "us",
            "groups": [{"group": "a"}, {"location": [1, 2]}, {"group": "c"}]
        }))
        .unwrap_err();

        assert_eq!(error, ModelError::missing("CaptureGroup", "group"));
    }
}
