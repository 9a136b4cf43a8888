//! Watson Visual Recognition v3 models.
//!
//! All models are closed. Timestamps decode from RFC 3339 into
//! `DateTime<Utc>` and are written back in UTC, keeping sub-millisecond digits.

mod classifiers;
mod classify;
mod collections;
mod common;
mod faces;

pub use classifiers::{Class, Classifier, ClassifierStatus, Classifiers};
pub use classify::{ClassResult, ClassifiedImage, ClassifiedImages, ClassifierResult};
pub use collections::{Collection, CollectionImage, CollectionImages, Collections, SimilarImages};
pub use common::{ErrorInfo, WarningInfo};
pub use faces::{
    DetectedFaces, Face, FaceAge, FaceGender, FaceIdentity, FaceLocation, ImageWithFaces,
};
