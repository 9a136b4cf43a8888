//! Results of `detect_faces`.

use super::common::{ErrorInfo, WarningInfo};
use crate::errors::ModelResult;
use crate::model::{DictReader, DictWriter, JsonMap, Model};

/// Information about a face detected in an image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Face {
    /// Estimated age range.
    pub age: Option<FaceAge>,
    /// Estimated gender.
    pub gender: Option<FaceGender>,
    /// Bounding box of the face.
    pub face_location: Option<FaceLocation>,
    /// Celebrity identity, when recognized.
    pub identity: Option<FaceIdentity>,
}

impl Model for Face {
    const NAME: &'static str = "Face";
    const FIELDS: &'static [&'static str] = &["age", "gender", "face_location", "identity"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            age: reader.optional_model("age")?,
            gender: reader.optional_model("gender")?,
            face_location: reader.optional_model("face_location")?,
            identity: reader.optional_model("identity")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .optional_model("age", &self.age)
            .optional_model("gender", &self.gender)
            .optional_model("face_location", &self.face_location)
            .optional_model("identity", &self.identity)
            .finish()
    }
}

/// Age range of a face.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaceAge {
    /// Estimated minimum age.
    pub min: Option<i64>,
    /// Estimated maximum age.
    pub max: Option<i64>,
    /// Confidence score in the range 0 to 1.
    pub score: Option<f64>,
}

impl Model for FaceAge {
    const NAME: &'static str = "FaceAge";
    const FIELDS: &'static [&'static str] = &["min", "max", "score"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            min: reader.optional("min")?,
            max: reader.optional("max")?,
            score: reader.optional("score")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .optional("min", &self.min)
            .optional("max", &self.max)
            .optional("score", &self.score)
            .finish()
    }
}

/// Gender of a face.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceGender {
    /// Gender identified by the face, `MALE` or `FEMALE`.
    pub gender: String,
    /// Confidence score in the range 0 to 1.
    pub score: Option<f64>,
}

impl Model for FaceGender {
    const NAME: &'static str = "FaceGender";
    const FIELDS: &'static [&'static str] = &["gender", "score"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            gender: reader.required("gender")?,
            score: reader.optional("score")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .field("gender", &self.gender)
            .optional("score", &self.score)
            .finish()
    }
}

/// Identity of a recognized celebrity.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceIdentity {
    /// Name of the person.
    pub name: String,
    /// Confidence score in the range 0 to 1.
    pub score: Option<f64>,
    /// Knowledge graph of the property, e.g. `/people/leaders`.
    pub type_hierarchy: Option<String>,
}

impl Model for FaceIdentity {
    const NAME: &'static str = "FaceIdentity";
    const FIELDS: &'static [&'static str] = &["name", "score", "type_hierarchy"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            name: reader.required("name")?,
            score: reader.optional("score")?,
            type_hierarchy: reader.optional("type_hierarchy")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .field("name", &self.name)
            .optional("score", &self.score)
            .optional("type_hierarchy", &self.type_hierarchy)
            .finish()
    }
}

/// Bounding box of a face, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceLocation {
    /// Width of the box.
    pub width: f64,
    /// Height of the box.
    pub height: f64,
    /// X-position of the top-left corner.
    pub left: f64,
    /// Y-position of the top-left corner.
    pub top: f64,
}

impl Model for FaceLocation {
    const NAME: &'static str = "FaceLocation";
    const FIELDS: &'static [&'static str] = &["width", "height", "left", "top"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            width: reader.required("width")?,
            height: reader.required("height")?,
            left: reader.required("left")?,
            top: reader.required("top")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .field("width", &self.width)
            .field("height", &self.height)
            .field("left", &self.left)
            .field("top", &self.top)
            .finish()
    }
}

/// Faces detected in one image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageWithFaces {
    /// Faces detected in the image.
    pub faces: Vec<Face>,
    /// Relative path of the image file if uploaded directly.
    pub image: Option<String>,
    /// Source of the image before any redirects.
    pub source_url: Option<String>,
    /// Fully resolved URL of the image after redirects are followed.
    pub resolved_url: Option<String>,
    /// Information about what might have caused a failure.
    pub error: Option<ErrorInfo>,
}

impl Model for ImageWithFaces {
    const NAME: &'static str = "ImageWithFaces";
    const FIELDS: &'static [&'static str] =
        &["faces", "image", "source_url", "resolved_url", "error"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            faces: reader.required_models("faces")?,
            image: reader.optional("image")?,
            source_url: reader.optional("source_url")?,
            resolved_url: reader.optional("resolved_url")?,
            error: reader.optional_model("error")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .models("faces", &self.faces)
            .optional("image", &self.image)
            .optional("source_url", &self.source_url)
            .optional("resolved_url", &self.resolved_url)
            .optional_model("error", &self.error)
            .finish()
    }
}

/// Results for all images.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectedFaces {
    /// Number of images processed for the API call.
    pub images_processed: Option<i64>,
    /// The images.
    pub images: Vec<ImageWithFaces>,
    /// Information about what might cause less than optimal output.
    pub warnings: Option<Vec<WarningInfo>>,
}

impl DetectedFaces {
    /// Total number of faces across all images.
    pub fn face_count(&self) -> usize {
        self.images.iter().map(|image| image.faces.len()).sum()
    }
}

impl Model for DetectedFaces {
    const NAME: &'static str = "DetectedFaces";
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

crate::model_traits!(
    Face,
    FaceAge,
    FaceGender,
    FaceIdentity,
    FaceLocation,
    ImageWithFaces,
    DetectedFaces,
);
