//! Watson Assistant v2 models.
//!
//! Covers the session and message payloads: user input, the assistant's
//! output and debug information, search skill results and conversation
//! context. Every model is closed except [`MessageContextSkills`] and
//! [`SearchResultHighlight`].

mod context;
mod dialog;
mod input;
mod output;
mod runtime;
mod search;
mod session;

pub use context::{
    MessageContext, MessageContextGlobal, MessageContextGlobalSystem, MessageContextSkill,
    MessageContextSkills, MAIN_SKILL,
};
pub use dialog::{
    DialogLogMessage, DialogNodeAction, DialogNodeActionType, DialogNodeOutputOptionsElement,
    DialogNodeOutputOptionsElementValue, DialogNodesVisited, DialogSuggestion,
    DialogSuggestionValue, LogLevel,
};
pub use input::{MessageInput, MessageInputOptions, MessageInputType};
pub use output::{
    BranchExitedReason, MessageOutput, MessageOutputDebug, MessageResponse, Preference,
    ResponseType, RuntimeResponseGeneric,
};
pub use runtime::{CaptureGroup, RuntimeEntity, RuntimeIntent};
pub use search::{SearchResult, SearchResultHighlight, SearchResultMetadata};
pub use session::SessionResponse;
