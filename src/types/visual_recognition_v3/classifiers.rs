//! Custom classifier metadata.

use chrono::{DateTime, Utc};

use crate::errors::ModelResult;
use crate::model::{DictReader, DictWriter, JsonMap, Model};

crate::open_enum! {
    /// Training status of a classifier.
    pub enum ClassifierStatus {
        /// Ready to classify.
        Ready => "ready",
        /// Being trained for the first time.
        Training => "training",
        /// Being retrained with new examples.
        Retraining => "retraining",
        /// Training failed; see `explanation`.
        Failed => "failed",
    }
}

/// A category within a classifier.
///
/// The wire key `class` is exposed as `class_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    /// The name of the class.
    pub class_name: String,
}

impl Class {
    /// Creates a class.
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
        }
    }
}

impl Model for Class {
    const NAME: &'static str = "Class";
    const FIELDS: &'static [&'static str] = &["class"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            class_name: reader.required("class")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new().field("class", &self.class_name).finish()
    }
}

/// Information about a classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Classifier {
    /// ID of a classifier identified in the image.
    pub classifier_id: String,
    /// Name of the classifier.
    pub name: String,
    /// Unique ID of the account who owns the classifier.
    pub owner: Option<String>,
    /// Training status of the classifier.
    pub status: Option<ClassifierStatus>,
    /// Reason the training failed, if any.
    pub explanation: Option<String>,
    /// When the classifier was created.
    pub created: Option<DateTime<Utc>>,
    /// Classes that define the classifier.
    pub classes: Option<Vec<Class>>,
}

impl Classifier {
    /// Creates a classifier with its required fields.
    pub fn new(classifier_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            classifier_id: classifier_id.into(),
            name: name.into(),
            owner: None,
            status: None,
            explanation: None,
            created: None,
            classes: None,
        }
    }

    /// Returns true when the classifier can be used.
    pub fn is_ready(&self) -> bool {
        self.status == Some(ClassifierStatus::Ready)
    }
}

impl Model for Classifier {
    const NAME: &'static str = "Classifier";
    const FIELDS: &'static [&'static str] = &[
        "classifier_id",
        "name",
        "owner",
        "status",
        "explanation",
        "created",
        "classes",
    ];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            classifier_id: reader.required("classifier_id")?,
            name: reader.required("name")?,
            owner: reader.optional("owner")?,
            status: reader.optional("status")?,
            explanation: reader.optional("explanation")?,
            created: reader.optional("created")?,
            classes: reader.optional_models("classes")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .field("classifier_id", &self.classifier_id)
            .field("name", &self.name)
            .optional("owner", &self.owner)
            .optional("status", &self.status)
            .optional("explanation", &self.explanation)
            .optional_datetime("created", &self.created)
            .optional_models("classes", &self.classes)
            .finish()
    }
}

/// A container for the list of classifiers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classifiers {
    /// List of classifiers.
    pub classifiers: Vec<Classifier>,
}

impl Model for Classifiers {
    const NAME: &'static str = "Classifiers";
    const FIELDS: &'static [&'static str] = &["classifiers"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            classifiers: reader.required_models("classifiers")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .models("classifiers", &self.classifiers)
            .finish()
    }
}

crate::model_traits!(Class, Classifier, Classifiers);
