//! Tests for the Visual Recognition v3 models against full service payloads.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use watson_client::request::DetailedResponse;
use watson_client::types::visual_recognition_v3::{
    ClassifiedImages, Classifier, ClassifierStatus, Classifiers, CollectionImages, DetectedFaces,
    SimilarImages,
};
use watson_client::{Model, ModelError, WatsonError};

fn classifiers() -> Value {
    json!({
        "classifiers": [
            {
                "classifier_id": "dogs_1941945966",
                "name": "dogs",
                "owner": "a3a48ea7-803b-4dac-babe-3df4b3e7a2b1",
                "status": "ready",
                "created": "2017-05-02T11:32:50.321Z",
                "classes": [{"class": "beagle"}, {"class": "goldenretriever"}, {"class": "husky"}]
            },
            {
                "classifier_id": "cats_1941945967",
                "name": "cats",
                "status": "failed",
                "explanation": "Not enough examples",
                "created": "2017-05-03T08:00:00.000Z"
            }
        ]
    })
}

#[test]
fn test_list_classifiers() {
    let list = Classifiers::from_value(classifiers()).unwrap();

    assert_eq!(list.classifiers.len(), 2);
    let ready: Vec<&Classifier> = list.classifiers.iter().filter(|c| c.is_ready()).collect();
    assert_eq!(ready.len(), 1);
    assert_eq!(list.classifiers[1].status, Some(ClassifierStatus::Failed));
    assert_eq!(
        list.classifiers[0].created,
        Some(Utc.with_ymd_and_hms(2017, 5, 2, 11, 32, 50).unwrap() + chrono::Duration::milliseconds(321))
    );
    assert_eq!(list.to_value(), classifiers());
}

#[test]
fn test_classify_response_through_detailed_response() {
    let body = json!({
        "images_processed": 1,
        "images": [{
            "image": "fruitbowl.jpg",
            "classifiers": [{
                "name": "default",
                "classifier_id": "default",
                "classes": [
                    {"class": "fruit", "score": 0.788},
                    {"class": "olive color", "score": 0.973, "type_hierarchy": "/color/olive color"}
                ]
            }]
        }]
    });

    let response = DetailedResponse::new(200, body.to_string());
    let images: ClassifiedImages = response.result().unwrap();

    let classifier = &images.images[0].classifiers[0];
    assert_eq!(classifier.top_class().unwrap().class_name, "olive color");
    assert_eq!(images.to_value(), body);
}

#[test]
fn test_detect_faces_with_error_image() {
    let body = json!({
        "images_processed": 2,
        "images": [
            {"faces": [{"age": {"min": 18, "max": 24}}], "image": "a.jpg"},
            {"faces": [], "image": "b.gif", "error": {"error_id": "input_error", "description": "Unsupported format"}}
        ],
        "warnings": [{"warning_id": "limit_reached", "description": "Only the first 15 faces are returned"}]
    });

    let faces = DetectedFaces::from_value(body.clone()).unwrap();
    assert_eq!(faces.face_count(), 1);
    assert_eq!(faces.images[1].error.as_ref().unwrap().error_id, "input_error");
    assert_eq!(faces.to_value(), body);
}

#[test]
fn test_collection_images_and_similar_search() {
    let image = json!({
        "image_id": "img-1",
        "created": "2017-05-02T13:47:10.000Z",
        "image_file": "shoe.jpg",
        "metadata": {"sku": "A-1"}
    });

    let images = CollectionImages::from_value(json!({"images": [image.clone()], "images_processed": 1}))
        .unwrap();
    assert_eq!(images.images[0].metadata, json!({"sku": "A-1"}));

    let mut scored = image;
    scored["score"] = json!(0.82);
    let similar =
        SimilarImages::from_value(json!({"similar_images": [scored], "images_processed": 1.0}))
            .unwrap();
    assert_eq!(similar.similar_images[0].score, Some(0.82));
}

#[test]
fn test_class_name_key_is_schema_violation() {
    let mut value = classifiers();
    value["classifiers"][0]["classes"][0] = json!({"class_name": "beagle"});

    let error = Classifiers::from_value(value.clone()).unwrap_err();
    assert_eq!(error, ModelError::schema_violation("Class", ["class_name".to_string()]));

    let response = DetailedResponse::new(200, value.to_string());
    assert!(matches!(
        response.result::<Classifiers>(),
        Err(WatsonError::ResponseShape { .. })
    ));
}
