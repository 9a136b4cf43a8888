//! User input sent to an assistant.

use super::runtime::{RuntimeEntity, RuntimeIntent};
use crate::errors::ModelResult;
use crate::model::{DictReader, DictWriter, JsonMap, Model};

crate::open_enum! {
    /// The type of user input.
    pub enum MessageInputType {
        /// Text input.
        Text => "text",
    }
}

/// An input object that includes the input text.
///
/// Every field is optional; an empty input is legal and serializes to `{}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageInput {
    /// The type of user input. Currently only text is supported.
    pub message_type: Option<MessageInputType>,
    /// The text of the user input. Must not contain carriage return, newline
    /// or tab characters.
    pub text: Option<String>,
    /// Properties that control how the assistant responds.
    pub options: Option<MessageInputOptions>,
    /// Intents to use instead of recognizing intents in the new input.
    pub intents: Option<Vec<RuntimeIntent>>,
    /// Entities to use instead of detecting entities in the new input.
    pub entities: Option<Vec<RuntimeEntity>>,
    /// For internal use only.
    pub suggestion_id: Option<String>,
}

impl MessageInput {
    /// Creates a text input.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            message_type: Some(MessageInputType::Text),
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Sets the response options.
    #[must_use]
    pub fn with_options(mut self, options: MessageInputOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Carries intents over from a previous response.
    #[must_use]
    pub fn with_intents(mut self, intents: Vec<RuntimeIntent>) -> Self {
        self.intents = Some(intents);
        self
    }

    /// Carries entities over from a previous response.
    #[must_use]
    pub fn with_entities(mut self, entities: Vec<RuntimeEntity>) -> Self {
        self.entities = Some(entities);
        self
    }
}

impl Model for MessageInput {
    const NAME: &'static str = "MessageInput";
    const FIELDS: &'static [&'static str] = &[
        "message_type",
        "text",
        "options",
        "intents",
        "entities",
        "suggestion_id",
    ];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            message_type: reader.optional("message_type")?,
            text: reader.optional("text")?,
            options: reader.optional_model("options")?,
            intents: reader.optional_models("intents")?,
            entities: reader.optional_models("entities")?,
            suggestion_id: reader.optional("suggestion_id")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .optional("message_type", &self.message_type)
            .optional("text", &self.text)
            .optional_model("options", &self.options)
            .optional_models("intents", &self.intents)
            .optional_models("entities", &self.entities)
            .optional("suggestion_id", &self.suggestion_id)
            .finish()
    }
}

/// Optional properties that control how the assistant responds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageInputOptions {
    /// Return diagnostic information under `output.debug`.
    pub debug: Option<bool>,
    /// Restart dialog processing at the root of the dialog.
    pub restart: Option<bool>,
    /// Return all matching intents rather than only the top one.
    pub alternate_intents: Option<bool>,
    /// Include the session context in the response.
    pub return_context: Option<bool>,
}

impl Model for MessageInputOptions {
    const NAME: &'static str = "MessageInputOptions";
    const FIELDS: &'static [&'static str] =
        &["debug", "restart", "alternate_intents", "return_context"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            debug: reader.optional("debug")?,
            restart: reader.optional("restart")?,
            alternate_intents: reader.optional("alternate_intents")?,
            return_context: reader.optional("return_context")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .optional("debug", &self.debug)
            .optional("restart", &self.restart)
            .optional("alternate_intents", &self.alternate_intents)
            .optional("return_context", &self.return_context)
            .finish()
    }
}

crate::model_traits!(MessageInput, MessageInputOptions);
