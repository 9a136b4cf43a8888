//! Error and warning payloads shared by the image operations.

use crate::errors::ModelResult;
use crate::model::{DictReader, DictWriter, JsonMap, Model};

/// Information about what might have caused a failure, such as an image
/// that is too large.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    /// Identifier of the error.
    pub error_id: String,
    /// Human-readable error description.
    pub description: String,
}

impl Model for ErrorInfo {
    const NAME: &'static str = "ErrorInfo";
    const FIELDS: &'static [&'static str] = &["error_id", "description"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            error_id: reader.required("error_id")?,
            description: reader.required("description")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .field("error_id", &self.error_id)
            .field("description", &self.description)
            .finish()
    }
}

/// Information about something that went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarningInfo {
    /// Codified warning string, such as `limit_reached`.
    pub warning_id: String,
    /// Information about the error.
    pub description: String,
}

impl Model for WarningInfo {
    const NAME: &'static str = "WarningInfo";
    const FIELDS: &'static [&'static str] = &["warning_id", "description"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            warning_id: reader.required("warning_id")?,
            description: reader.required("description")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .field("warning_id", &self.warning_id)
            .field("description", &self.description)
            .finish()
    }
}

crate::model_traits!(ErrorInfo, WarningInfo);
