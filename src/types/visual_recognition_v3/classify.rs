//! Results of `classify`.

use super::common::{ErrorInfo, WarningInfo};
use crate::errors::ModelResult;
use crate::model::{DictReader, DictWriter, JsonMap, Model};

/// A class matched by a classifier, with its score.
///
/// The wire key `class` is exposed as `class_name`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassResult {
    /// Name of the class.
    pub class_name: String,
    /// Confidence score for the property, between 0 and 1.
    pub score: Option<f64>,
    /// Knowledge graph of the property, e.g. `/fruit/pome/apple`.
    pub type_hierarchy: Option<String>,
}

impl ClassResult {
    /// Creates a class result.
    pub fn new(class_name: impl Into<String>, score: f64) -> Self {
        Self {
            class_name: class_name.into(),
            score: Some(score),
            type_hierarchy: None,
        }
    }
}

impl Model for ClassResult {
    const NAME: &'static str = "ClassResult";
    const FIELDS: &'static [&'static str] = &["class", "score", "type_hierarchy"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            class_name: reader.required("class")?,
            score: reader.optional("score")?,
            type_hierarchy: reader.optional("type_hierarchy")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .field("class", &self.class_name)
            .optional("score", &self.score)
            .optional("type_hierarchy", &self.type_hierarchy)
            .finish()
    }
}

/// Classifier and score combination.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierResult {
    /// Name of the classifier.
    pub name: String,
    /// ID of a classifier identified in the image.
    pub classifier_id: String,
    /// Classes within the classifier.
    pub classes: Vec<ClassResult>,
}

impl ClassifierResult {
    /// Returns the class with the highest score.
    pub fn top_class(&self) -> Option<&ClassResult> {
        self.classes.iter().max_by(|a, b| {
            a.score
                .unwrap_or_default()
                .total_cmp(&b.score.unwrap_or_default())
        })
    }
}

impl Model for ClassifierResult {
    const NAME: &'static str = "ClassifierResult";
    const FIELDS: &'static [&'static str] = &["name", "classifier_id", "classes"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            name: reader.required("name")?,
            classifier_id: reader.required("classifier_id")?,
            classes: reader.required_models("classes")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .field("name", &self.name)
            .field("classifier_id", &self.classifier_id)
            .models("classes", &self.classes)
            .finish()
    }
}

/// Results for one image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedImage {
    /// Source of the image before any redirects. Not returned when the image
    /// is uploaded.
    pub source_url: Option<String>,
    /// Fully resolved URL of the image after redirects are followed.
    pub resolved_url: Option<String>,
    /// Relative path of the image file if uploaded directly.
    pub image: Option<String>,
    /// Information about what might have caused a failure.
    pub error: Option<ErrorInfo>,
    /// The classifiers.
    pub classifiers: Vec<ClassifierResult>,
}

impl Model for ClassifiedImage {
    const NAME: &'static str = "ClassifiedImage";
    const FIELDS: &'static [&'static str] =
        &["source_url", "resolved_url", "image", "error", "classifiers"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            source_url: reader.optional("source_url")?,
            resolved_url: reader.optional("resolved_url")?,
            image: reader.optional("image")?,
            error: reader.optional_model("error")?,
            classifiers: reader.required_models("classifiers")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .optional("source_url", &self.source_url)
            .optional("resolved_url", &self.resolved_url)
            .optional("image", &self.image)
            .optional_model("error", &self.error)
            .models("classifiers", &self.classifiers)
            .finish()
    }
}

/// Results for all images.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedImages {
    /// Number of custom classes identified in the images.
    pub images_processed: Option<i64>,
    /// Classified images.
    pub images: Vec<ClassifiedImage>,
    /// Information about what might cause less than optimal output.
    pub warnings: Option<Vec<WarningInfo>>,
}

impl Model for ClassifiedImages {
    const NAME: &'static str = "ClassifiedImages";
    const FIELDS: &'static [&'static str] = &["images_processed", "images", "warnings"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            images_processed: reader.optional("images_processed")?,
            images: reader.required_models("images")?,
            warnings: reader.optional_models("warnings")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .optional("images_processed", &self.images_processed)
            .models("images", &self.images)
            .optional_models("warnings", &self.warnings)
            .finish()
    }
}

crate::model_traits!(ClassResult, ClassifierResult, ClassifiedImage, ClassifiedImages);
