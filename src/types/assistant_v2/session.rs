//! Sessions.

use crate::errors::ModelResult;
use crate::model::{DictReader, DictWriter, JsonMap, Model};

/// The session created by `create_session`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionResponse {
    /// The session ID.
    pub session_id: String,
}

impl SessionResponse {
    /// Creates a session response.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
        }
    }
}

impl Model for SessionResponse {
    const NAME: &'static str = "SessionResponse";
    const FIELDS: &'static [&'static str] = &["session_id"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            session_id: reader.required("session_id")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .field("session_id", &self.session_id)
            .finish()
    }
}

crate::model_traits!(SessionResponse);
