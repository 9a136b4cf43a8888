//! IBM Watson Client Library
//!
//! Typed models for IBM Watson service payloads, plus the configuration,
//! authentication and request plumbing needed to talk to the services from
//! any HTTP client.
//!
//! # Features
//!
//! - **Generated Models**: one Rust type per service JSON schema, with a
//!   symmetric `from_dict` / `to_dict` contract ([`Model`])
//! - **Strict by default**: closed models reject unknown keys so version skew
//!   surfaces immediately; open models keep extra keys verbatim
//! - **Open enumerations**: documented string values as variants, unknown
//!   values preserved
//! - **Request preparation**: versioned URLs, SDK headers, basic and bearer
//!   authentication, JSON bodies
//! - **Observability**: `tracing` events with credential redaction
//!
//! # Quick Start
//!
//! ```rust
//! use watson_client::auth::NoAuthAuthenticator;
//! use watson_client::request::{DetailedResponse, HttpMethod, RequestBuilder};
//! use watson_client::types::assistant_v2::{MessageInput, MessageResponse};
//! use watson_client::{DictWriter, ServiceConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServiceConfig::builder()
//!     .service_name("assistant")
//!     .version("2019-02-28")
//!     .build()?;
//!
//! let body = DictWriter::new()
//!     .model("input", &MessageInput::text("Hello"))
//!     .finish();
//!
//! let request = RequestBuilder::new(
//!     &config,
//!     HttpMethod::Post,
//!     &["v2", "assistants", "my-assistant", "sessions", "my-session", "message"],
//! )
//! .operation("V2", "message")
//! .json_field_body(body)?
//! .build(&NoAuthAuthenticator)?;
//! assert!(request.url.as_str().ends_with("/message?version=2019-02-28"));
//!
//! // Send `request` with the HTTP client of your choice, then:
//! let response = DetailedResponse::new(
//!     200,
//!     r#"{"output": {"generic": [{"response_type": "text", "text": "Hi!"}]}}"#,
//! );
//! let message: MessageResponse = response.result()?;
//! assert_eq!(message.texts(), vec!["Hi!"]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod auth;
pub mod codec;
pub mod config;
pub mod errors;
pub mod model;
pub mod observability;
pub mod request;
pub mod types;

// Re-exports for convenience
pub use auth::{
    authenticator_from_env, Authenticator, BasicAuthenticator, BearerTokenAuthenticator,
    NoAuthAuthenticator,
};
pub use config::{ServiceConfig, ServiceConfigBuilder};
pub use errors::{ModelError, ModelResult, WatsonError, WatsonResult};
pub use model::{DictReader, DictWriter, JsonMap, Model, Shape};
pub use request::{DetailedResponse, HttpMethod, PreparedRequest, RequestBuilder};

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json;
}
