//! Conversation state carried between turns.

use crate::errors::ModelResult;
use crate::model::{DictReader, DictWriter, JsonMap, Model, Shape};

/// Key of the dialog skill inside [`MessageContextSkills`].
pub const MAIN_SKILL: &str = "main skill";

/// State information for the conversation.
///
/// The wire key `global` is exposed as `global_context`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageContext {
    /// Information shared by all skills used by the assistant.
    pub global_context: Option<MessageContextGlobal>,
    /// Information specific to particular skills.
    pub skills: Option<MessageContextSkills>,
}

impl Model for MessageContext {
    const NAME: &'static str = "MessageContext";
    const FIELDS: &'static [&'static str] = &["global", "skills"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            global_context: reader.optional_model("global")?,
            skills: reader.optional_model("skills")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .optional_model("global", &self.global_context)
            .optional_model("skills", &self.skills)
            .finish()
    }
}

/// Information shared by all skills used by the assistant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageContextGlobal {
    /// Built-in system properties.
    pub system: Option<MessageContextGlobalSystem>,
}

impl Model for MessageContextGlobal {
    const NAME: &'static str = "MessageContextGlobal";
    const FIELDS: &'static [&'static str] = &["system"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            system: reader.optional_model("system")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .optional_model("system", &self.system)
            .finish()
    }
}

/// Built-in system properties that apply to all skills.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageContextGlobalSystem {
    /// The user time zone, used to resolve relative time references.
    pub timezone: Option<String>,
    /// Identifies the end user. Must not contain carriage return, newline or
    /// tab characters.
    pub user_id: Option<String>,
    /// Turn counter; `1` marks the first turn of a new conversation.
    pub turn_count: Option<i64>,
}

impl Model for MessageContextGlobalSystem {
    const NAME: &'static str = "MessageContextGlobalSystem";
    const FIELDS: &'static [&'static str] = &["timezone", "user_id", "turn_count"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            timezone: reader.optional("timezone")?,
            user_id: reader.optional("user_id")?,
            turn_count: reader.optional("turn_count")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .optional("timezone", &self.timezone)
            .optional("user_id", &self.user_id)
            .optional("turn_count", &self.turn_count)
            .finish()
    }
}

/// Information specific to one skill.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageContextSkill {
    /// Arbitrary variables that can be read and written by the skill.
    pub user_defined: Option<JsonMap>,
    /// For internal use only.
    pub system: Option<JsonMap>,
}

impl Model for MessageContextSkill {
    const NAME: &'static str = "MessageContextSkill";
    const FIELDS: &'static [&'static str] = &["user_defined", "system"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            user_defined: reader.optional("user_defined")?,
            system: reader.optional("system")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .optional("user_defined", &self.user_defined)
            .optional("system", &self.system)
            .finish()
    }
}

/// Skill-specific state, keyed by skill name.
///
/// Open model with no declared fields: every entry is kept verbatim in
/// `additional_properties`. Use [`skill`](Self::skill) to decode an entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageContextSkills {
    /// Skill entries, in the order received.
    pub additional_properties: JsonMap,
}

impl MessageContextSkills {
    /// Decodes the entry stored under `name`, if present.
    pub fn skill(&self, name: &str) -> Option<ModelResult<MessageContextSkill>> {
        self.additional_properties
            .get(name)
            .cloned()
            .map(MessageContextSkill::from_value)
    }

    /// Decodes the dialog skill entry.
    pub fn main_skill(&self) -> Option<ModelResult<MessageContextSkill>> {
        self.skill(MAIN_SKILL)
    }

    /// Stores `skill` under `name`, replacing any previous entry.
    pub fn set_skill(&mut self, name: impl Into<String>, skill: &MessageContextSkill) {
        self.additional_properties
            .insert(name.into(), skill.to_value());
    }
}

impl Model for MessageContextSkills {
    const NAME: &'static str = "MessageContextSkills";
    const FIELDS: &'static [&'static str] = &[];
    const SHAPE: Shape = Shape::Open;

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            additional_properties: reader.into_residual(),
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .residual(&self.additional_properties)
            .finish()
    }
}

crate::model_traits!(
    MessageContext,
    MessageContextGlobal,
    MessageContextGlobalSystem,
    MessageContextSkill,
    MessageContextSkills,
);
