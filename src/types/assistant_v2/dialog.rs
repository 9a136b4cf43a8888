//! Dialog node actions, options, suggestions and diagnostics.

use super::input::MessageInput;
use crate::errors::ModelResult;
use crate::model::{DictReader, DictWriter, JsonMap, Model};

crate::open_enum! {
    /// The severity of a dialog log message.
    pub enum LogLevel {
        /// Informational message.
        Info => "info",
        /// Error message.
        Error => "error",
        /// Warning message.
        Warn => "warn",
    }
}

crate::open_enum! {
    /// The type of action a dialog node invokes.
    pub enum DialogNodeActionType {
        /// Handled by the client application.
        Client => "client",
        /// Handled by the server.
        Server => "server",
        /// An IBM Cloud Functions web action.
        WebAction => "web-action",
        /// An IBM Cloud Functions action.
        CloudFunction => "cloud-function",
    }
}

/// Dialog log message details.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogLogMessage {
    /// The severity of the log message.
    pub level: LogLevel,
    /// The text of the log message.
    pub message: String,
}

impl DialogLogMessage {
    /// Creates a log message.
    pub fn new(level: impl Into<LogLevel>, message: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            message: message.into(),
        }
    }
}

impl Model for DialogLogMessage {
    const NAME: &'static str = "DialogLogMessage";
    const FIELDS: &'static [&'static str] = &["level", "message"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            level: reader.required("level")?,
            message: reader.required("message")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .field("level", &self.level)
            .field("message", &self.message)
            .finish()
    }
}

/// An action requested by a dialog node.
///
/// The wire key `type` is exposed as `action_type`.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogNodeAction {
    /// The name of the action.
    pub name: String,
    /// The type of action to invoke.
    pub action_type: Option<DialogNodeActionType>,
    /// Key/value pairs to be provided to the action.
    pub parameters: Option<JsonMap>,
    /// Where in the dialog context the action result is stored.
    pub result_variable: String,
    /// Context variable the client uses to pass credentials for the action.
    pub credentials: Option<String>,
}

impl DialogNodeAction {
    /// Creates an action with its required fields.
    pub fn new(name: impl Into<String>, result_variable: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            action_type: None,
            parameters: None,
            result_variable: result_variable.into(),
            credentials: None,
        }
    }
}

impl Model for DialogNodeAction {
    const NAME: &'static str = "DialogNodeAction";
    const FIELDS: &'static [&'static str] = &[
        "name",
        "type",
        "parameters",
        "result_variable",
        "credentials",
    ];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            name: reader.required("name")?,
            action_type: reader.optional("type")?,
            parameters: reader.optional("parameters")?,
            result_variable: reader.required("result_variable")?,
            credentials: reader.optional("credentials")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .field("name", &self.name)
            .optional("type", &self.action_type)
            .optional("parameters", &self.parameters)
            .field("result_variable", &self.result_variable)
            .optional("credentials", &self.credentials)
            .finish()
    }
}

/// An option the user can choose from an `option` response.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogNodeOutputOptionsElement {
    /// The user-facing label for the option.
    pub label: String,
    /// The input sent to the assistant if the user selects this option.
    pub value: DialogNodeOutputOptionsElementValue,
}

impl Model for DialogNodeOutputOptionsElement {
    const NAME: &'static str = "DialogNodeOutputOptionsElement";
    const FIELDS: &'static [&'static str] = &["label", "value"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            label: reader.required("label")?,
            value: reader.required_model("value")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .field("label", &self.label)
            .model("value", &self.value)
            .finish()
    }
}

/// The message input to send if the user selects an option.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DialogNodeOutputOptionsElementValue {
    /// An input object that includes the input text.
    pub input: Option<MessageInput>,
}

impl Model for DialogNodeOutputOptionsElementValue {
    const NAME: &'static str = "DialogNodeOutputOptionsElementValue";
    const FIELDS: &'static [&'static str] = &["input"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            input: reader.optional_model("input")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .optional_model("input", &self.input)
            .finish()
    }
}

/// A dialog node that was triggered while processing the input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DialogNodesVisited {
    /// The dialog node ID.
    pub dialog_node: Option<String>,
    /// The title of the dialog node.
    pub title: Option<String>,
    /// The conditions that trigger the dialog node.
    pub conditions: Option<String>,
}

impl Model for DialogNodesVisited {
    const NAME: &'static str = "DialogNodesVisited";
    const FIELDS: &'static [&'static str] = &["dialog_node", "title", "conditions"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            dialog_node: reader.optional("dialog_node")?,
            title: reader.optional("title")?,
            conditions: reader.optional("conditions")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .optional("dialog_node", &self.dialog_node)
            .optional("title", &self.title)
            .optional("conditions", &self.conditions)
            .finish()
    }
}

/// A disambiguation option offered by a `suggestion` response.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogSuggestion {
    /// The user-facing label, taken from the node's title or user label.
    pub label: String,
    /// The input sent to the assistant if the user selects this option.
    pub value: DialogSuggestionValue,
    /// The dialog output returned if the user selects this option.
    pub output: Option<JsonMap>,
}

impl Model for DialogSuggestion {
    const NAME: &'static str = "DialogSuggestion";
    const FIELDS: &'static [&'static str] = &["label", "value", "output"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            label: reader.required("label")?,
            value: reader.required_model("value")?,
            output: reader.optional("output")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .field("label", &self.label)
            .model("value", &self.value)
            .optional("output", &self.output)
            .finish()
    }
}

/// The message input to send if the user selects a suggestion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DialogSuggestionValue {
    /// An input object that includes the input text.
    pub input: Option<MessageInput>,
}

impl Model for DialogSuggestionValue {
    const NAME: &'static str = "DialogSuggestionValue";
    const FIELDS: &'static [&'static str] = &["input"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            input: reader.optional_model("input")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .optional_model("input", &self.input)
            .finish()
    }
}

crate::model_traits!(
    DialogLogMessage,
    DialogNodeAction,
    DialogNodeOutputOptionsElement,
    DialogNodeOutputOptionsElementValue,
    DialogNodesVisited,
    DialogSuggestion,
    DialogSuggestionValue,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ModelError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_action_type_key_rename() {
        let value = json!({
            "name": "get_weather",
            "type": "web-action",
            "parameters": {"city": "Austin"},
            "result_variable": "context.weather"
        });

        let action = DialogNodeAction::from_value(value.clone()).unwrap();
        assert_eq!(action.action_type, Some(DialogNodeActionType::WebAction));
        assert_eq!(action.to_value(), value);
        assert!(!action.to_dict().contains_key("action_type"));
    }

    #[test]
    fn test_action_rejects_internal_field_name() {
        let error = DialogNodeAction::from_value(json!({
            "name": "a",
            "result_variable": "r",
            "action_type": "client"
        }))
        .unwrap_err();
        assert!(error.is_schema_violation());
    }

    #[test]
    fn test_unknown_log_level_is_kept() {
        let message =
            DialogLogMessage::from_value(json!({"level": "debug", "message": "trace"})).unwrap();
        assert_eq!(message.level, LogLevel::Other("debug".to_string()));
        assert_eq!(message.to_value()["level"], json!("debug"));
    }

    #[test]
    fn test_option_element_requires_value() {
        let error = DialogNodeOutputOptionsElement::from_value(json!({"label": "Yes"})).unwrap_err();
        assert_eq!(
            error,
            ModelError::missing("DialogNodeOutputOptionsElement", "value")
        );
    }

    #[test]
    fn test_suggestion_nested_input() {
        let value = json!({
            "label": "Store hours",
            "value": {"input": {"text": "When are you open?"}},
            "output": {"generic": []}
        });

        let suggestion = DialogSuggestion::from_value(value.clone()).unwrap();
        let input = suggestion.value.input.as_ref().unwrap();
        assert_eq!(input.text.as_deref(), Some("When are you open?"));
        assert_eq!(suggestion.to_value(), value);
    }

    #[test]
    fn test_empty_value_serializes_empty() {
        assert!(DialogSuggestionValue::default().to_dict().is_empty());
        assert_eq!(DialogNodesVisited::default().to_string(), "{}");
    }
}
