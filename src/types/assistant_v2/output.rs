//! Assistant responses.

use super::context::MessageContext;
use super::dialog::{
    DialogLogMessage, DialogNodeAction, DialogNodeOutputOptionsElement, DialogNodesVisited,
    DialogSuggestion,
};
use super::runtime::{RuntimeEntity, RuntimeIntent};
use super::search::SearchResult;
use crate::errors::ModelResult;
use crate::model::{DictReader, DictWriter, JsonMap, Model};

crate::open_enum! {
    /// Why a dialog branch was exited.
    pub enum BranchExitedReason {
        /// The dialog completed by itself.
        Completed => "completed",
        /// The dialog was interrupted.
        Fallback => "fallback",
    }
}

crate::open_enum! {
    /// The type of response returned by a dialog node.
    pub enum ResponseType {
        /// Plain text.
        Text => "text",
        /// A pause, optionally with a typing indicator.
        Pause => "pause",
        /// An image.
        Image => "image",
        /// A list of options.
        Option => "option",
        /// A request to transfer to a human agent.
        ConnectToAgent => "connect_to_agent",
        /// Disambiguation suggestions.
        Suggestion => "suggestion",
        /// Search skill results.
        Search => "search",
    }
}

crate::open_enum! {
    /// The preferred control for an `option` response.
    pub enum Preference {
        /// A drop-down list.
        Dropdown => "dropdown",
        /// A set of buttons.
        Button => "button",
    }
}

/// A response from the assistant.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageResponse {
    /// Output to be rendered or processed by the client.
    pub output: MessageOutput,
    /// Conversation state; only present when `return_context` was requested.
    pub context: Option<MessageContext>,
}

impl MessageResponse {
    /// Returns the text of every `text` response, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.output
            .generic
            .iter()
            .flatten()
            .filter(|generic| generic.response_type == ResponseType::Text)
            .filter_map(|generic| generic.text.as_deref())
            .collect()
    }
}

impl Model for MessageResponse {
    const NAME: &'static str = "MessageResponse";
    const FIELDS: &'static [&'static str] = &["output", "context"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            output: reader.required_model("output")?,
            context: reader.optional_model("context")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .model("output", &self.output)
            .optional_model("context", &self.context)
            .finish()
    }
}

/// Assistant output to be rendered or processed by the client.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageOutput {
    /// Output intended for any channel.
    pub generic: Option<Vec<RuntimeResponseGeneric>>,
    /// Intents recognized in the input, by descending confidence.
    pub intents: Option<Vec<RuntimeIntent>>,
    /// Entities identified in the input.
    pub entities: Option<Vec<RuntimeEntity>>,
    /// Actions requested by the dialog node.
    pub actions: Option<Vec<DialogNodeAction>>,
    /// Diagnostic information, present when `debug` was requested.
    pub debug: Option<MessageOutputDebug>,
    /// Custom properties defined in the dialog node output.
    pub user_defined: Option<JsonMap>,
}

impl MessageOutput {
    /// Returns the recognized intent with the highest confidence.
    pub fn top_intent(&self) -> Option<&RuntimeIntent> {
        self.intents
            .iter()
            .flatten()
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
    }
}

impl Model for MessageOutput {
    const NAME: &'static str = "MessageOutput";
    const FIELDS: &'static [&'static str] = &[
        "generic",
        "intents",
        "entities",
        "actions",
        "debug",
        "user_defined",
    ];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            generic: reader.optional_models("generic")?,
            intents: reader.optional_models("intents")?,
            entities: reader.optional_models("entities")?,
            actions: reader.optional_models("actions")?,
            debug: reader.optional_model("debug")?,
            user_defined: reader.optional("user_defined")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .optional_models("generic", &self.generic)
            .optional_models("intents", &self.intents)
            .optional_models("entities", &self.entities)
            .optional_models("actions", &self.actions)
            .optional_model("debug", &self.debug)
            .optional("user_defined", &self.user_defined)
            .finish()
    }
}

/// Details about how a message response was generated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageOutputDebug {
    /// Nodes triggered while processing the input.
    pub nodes_visited: Option<Vec<DialogNodesVisited>>,
    /// Up to 50 messages logged with the request.
    pub log_messages: Option<Vec<DialogLogMessage>>,
    /// Whether this response concludes or interrupts a dialog.
    pub branch_exited: Option<bool>,
    /// Whether the dialog completed by itself or was interrupted.
    pub branch_exited_reason: Option<BranchExitedReason>,
}

impl Model for MessageOutputDebug {
    const NAME: &'static str = "MessageOutputDebug";
    const FIELDS: &'static [&'static str] = &[
        "nodes_visited",
        "log_messages",
        "branch_exited",
        "branch_exited_reason",
    ];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            nodes_visited: reader.optional_models("nodes_visited")?,
            log_messages: reader.optional_models("log_messages")?,
            branch_exited: reader.optional("branch_exited")?,
            branch_exited_reason: reader.optional("branch_exited_reason")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .optional_models("nodes_visited", &self.nodes_visited)
            .optional_models("log_messages", &self.log_messages)
            .optional("branch_exited", &self.branch_exited)
            .optional("branch_exited_reason", &self.branch_exited_reason)
            .finish()
    }
}

/// One response for the client to render.
///
/// Which optional fields are populated depends on `response_type`.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeResponseGeneric {
    /// The type of response.
    pub response_type: ResponseType,
    /// The text of the response.
    pub text: Option<String>,
    /// How long to pause, in milliseconds.
    pub time: Option<i64>,
    /// Whether to send a "user is typing" event during the pause.
    pub typing: Option<bool>,
    /// The URL of the image.
    pub source: Option<String>,
    /// Title or introductory text shown before the response.
    pub title: Option<String>,
    /// Description shown with the response.
    pub description: Option<String>,
    /// The preferred type of control to display.
    pub preference: Option<Preference>,
    /// Options from which the user can choose.
    pub options: Option<Vec<DialogNodeOutputOptionsElement>>,
    /// Message for the human agent taking over the conversation.
    pub message_to_human_agent: Option<String>,
    /// Topic label derived from the node's user label.
    pub topic: Option<String>,
    /// Possible matching dialog nodes for disambiguation.
    pub suggestions: Option<Vec<DialogSuggestion>>,
    /// Introductory text defined in the search skill configuration.
    pub header: Option<String>,
    /// Search results.
    pub results: Option<Vec<SearchResult>>,
}

impl RuntimeResponseGeneric {
    /// Creates a response of the given type with no other fields set.
    pub fn new(response_type: impl Into<ResponseType>) -> Self {
        Self {
            response_type: response_type.into(),
            text: None,
            time: None,
            typing: None,
            source: None,
            title: None,
            description: None,
            preference: None,
            options: None,
            message_to_human_agent: None,
            topic: None,
            suggestions: None,
            header: None,
            results: None,
        }
    }

    /// Creates a `text` response.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(ResponseType::Text)
        }
    }
}

impl Model for RuntimeResponseGeneric {
    const NAME: &'static str = "RuntimeResponseGeneric";
    const FIELDS: &'static [&'static str] = &[
        "response_type",
        "text",
        "time",
        "typing",
        "source",
        "title",
        "description",
        "preference",
        "options",
        "message_to_human_agent",
        "topic",
        "suggestions",
        "header",
        "results",
    ];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            response_type: reader.required("response_type")?,
            text: reader.optional("text")?,
            time: reader.optional("time")?,
            typing: reader.optional("typing")?,
            source: reader.optional("source")?,
            title: reader.optional("title")?,
            description: reader.optional("description")?,
            preference: reader.optional("preference")?,
            options: reader.optional_models("options")?,
            message_to_human_agent: reader.optional("message_to_human_agent")?,
            topic: reader.optional("topic")?,
            suggestions: reader.optional_models("suggestions")?,
            header: reader.optional("header")?,
            results: reader.optional_models("results")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .field("response_type", &self.response_type)
            .optional("text", &self.text)
            .optional("time", &self.time)
            .optional("typing", &self.typing)
            .optional("source", &self.source)
            .optional("title", &self.title)
            .optional("description", &self.description)
            .optional("preference", &self.preference)
            .optional_models("options", &self.options)
            .optional("message_to_human_agent", &self.message_to_human_agent)
            .optional("topic", &self.topic)
            .optional_models("suggestions", &self.suggestions)
            .optional("header", &self.header)
            .optional_models("results", &self.results)
            .finish()
    }
}

crate::model_traits!(
    MessageResponse,
    MessageOutput,
    MessageOutputDebug,
    RuntimeResponseGeneric,
);
