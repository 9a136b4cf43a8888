//! Similarity-search collections.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::errors::ModelResult;
use crate::model::{DictReader, DictWriter, JsonMap, Model};

/// A collection of images to search.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    /// The ID of the collection.
    pub collection_id: Option<String>,
    /// The name of the collection.
    pub name: String,
    /// When the collection was created.
    pub created: DateTime<Utc>,
    /// The number of images in the collection.
    pub images: i64,
    /// The status of the collection, `available` or `unavailable`.
    pub status: String,
    /// The number of images possible in the collection.
    pub capacity: i64,
}

impl Model for Collection {
    const NAME: &'static str = "Collection";
    const FIELDS: &'static [&'static str] = &[
        "collection_id",
        "name",
        "created",
        "images",
        "status",
        "capacity",
    ];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            collection_id: reader.optional("collection_id")?,
            name: reader.required("name")?,
            created: reader.required("created")?,
            images: reader.required("images")?,
            status: reader.required("status")?,
            capacity: reader.required("capacity")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .optional("collection_id", &self.collection_id)
            .field("name", &self.name)
            .datetime("created", &self.created)
            .field("images", &self.images)
            .field("status", &self.status)
            .field("capacity", &self.capacity)
            .finish()
    }
}

/// An image stored in a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionImage {
    /// The unique ID of the image.
    pub image_id: String,
    /// When the image was added to the collection.
    pub created: DateTime<Utc>,
    /// The file name of the image.
    pub image_file: String,
    /// Metadata stored with the image. Any JSON value.
    pub metadata: Value,
    /// Confidence of a similarity match, between 0 and 1.
    pub score: Option<f64>,
}

impl Model for CollectionImage {
    const NAME: &'static str = "CollectionImage";
    const FIELDS: &'static [&'static str] =
        &["image_id", "created", "image_file", "metadata", "score"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            image_id: reader.required("image_id")?,
            created: reader.required("created")?,
            image_file: reader.required("image_file")?,
            metadata: reader.required_value("metadata")?,
            score: reader.optional("score")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .field("image_id", &self.image_id)
            .datetime("created", &self.created)
            .field("image_file", &self.image_file)
            .field("metadata", &self.metadata)
            .optional("score", &self.score)
            .finish()
    }
}

/// Images added to a collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionImages {
    /// The images.
    pub images: Vec<CollectionImage>,
    /// The number of images processed by the request.
    pub images_processed: Option<i64>,
}

impl Model for CollectionImages {
    const NAME: &'static str = "CollectionImages";
    const FIELDS: &'static [&'static str] = &["images", "images_processed"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            images: reader.required_models("images")?,
            images_processed: reader.optional("images_processed")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .models("images", &self.images)
            .optional("images_processed", &self.images_processed)
            .finish()
    }
}

/// All collections owned by the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collections {
    /// The collections.
    pub collections: Vec<Collection>,
}

impl Model for Collections {
    const NAME: &'static str = "Collections";
    const FIELDS: &'static [&'static str] = &["collections"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            collections: reader.required_models("collections")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .models("collections", &self.collections)
            .finish()
    }
}

/// Images in a collection similar to a query image.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarImages {
    /// The matches, by descending score.
    pub similar_images: Vec<CollectionImage>,
    /// The number of images processed by the request.
    pub images_processed: f64,
}

impl Model for SimilarImages {
    const NAME: &'static str = "SimilarImages";
    const FIELDS: &'static [&'static str] = &["similar_images", "images_processed"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            similar_images: reader.required_models("similar_images")?,
            images_processed: reader.required("images_processed")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .models("similar_images", &self.similar_images)
            .field("images_processed", &self.images_processed)
            .finish()
    }
}

crate::model_traits!(
    Collection,
    CollectionImage,
    CollectionImages,
    Collections,
    SimilarImages,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ModelError;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_collection_round_trip() {
        let value = json!({
            "collection_id": "col-1",
            "name": "shoes",
            "created": "2017-05-02T13:47:10.000Z",
            "images": 42,
            "status": "available",
            "capacity": 1000000
        });

        let collection = Collection::from_value(value.clone()).unwrap();
        assert_eq!(collection.images, 42);
        assert_eq!(collection.to_value(), value);
    }

    #[test]
    fn test_collection_requires_created() {
        let error = Collection::from_value(json!({
            "name": "shoes",
            "images": 0,
            "status": "available",
            "capacity": 10
        }))
        .unwrap_err();
        assert_eq!(error, ModelError::missing("Collection", "created"));
    }

    #[test]
    fn test_image_metadata_is_arbitrary_json() {
        let value = json!({
            "image_id": "img-1",
            "created": "2017-05-02T13:47:10.123Z",
            "image_file": "red_shoe.jpg",
            "metadata": ["any", {"shape": 1}, null],
            "score": 0.93
        });

        let image = CollectionImage::from_value(value.clone()).unwrap();
        assert_eq!(image.metadata, json!(["any", {"shape": 1}, null]));
        assert_eq!(image.to_value(), value);
    }

    #[test]
    fn test_image_metadata_is_required() {
        let error = CollectionImage::from_value(json!({
            "image_id": "img-1",
            "created": "2017-05-02T13:47:10.123Z",
            "image_file": "red_shoe.jpg"
        }))
        .unwrap_err();
        assert_eq!(error, ModelError::missing("CollectionImage", "metadata"));
    }

    #[test]
    fn test_image_with_null_metadata_round_trips() {
        let image = CollectionImage {
            image_id: "img-2".to_string(),
            created: Utc.with_ymd_and_hms(2017, 5, 2, 13, 47, 10).unwrap(),
            image_file: "blue_shoe.jpg".to_string(),
            metadata: Value::Null,
            score: None,
        };

        let value = image.to_value();
        assert_eq!(value["metadata"], Value::Null);
        assert_eq!(CollectionImage::from_value(value).unwrap(), image);
    }

    #[test]
    fn test_similar_images() {
        let similar = SimilarImages::from_value(json!({
            "similar_images": [],
            "images_processed": 1
        }))
        .unwrap();

        assert!(similar.similar_images.is_empty());
        assert_eq!(similar.images_processed, 1.0);
        assert_eq!(
            Collections::from_value(json!({"collections": []})).unwrap(),
            Collections::default()
        );
    }
}
