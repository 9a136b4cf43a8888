//! Search skill results.

use crate::errors::ModelResult;
use crate::model::{DictReader, DictWriter, JsonMap, Model, Shape};

/// One result returned by a search skill.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// The unique identifier of the document in the Discovery collection.
    pub id: String,
    /// Metadata about the search result.
    pub result_metadata: SearchResultMetadata,
    /// A description of the search result.
    pub body: Option<String>,
    /// The title of the search result.
    pub title: Option<String>,
    /// The URL of the original data object in its native data source.
    pub url: Option<String>,
    /// Segments of the document that matched the query.
    pub highlight: Option<SearchResultHighlight>,
}

impl Model for SearchResult {
    const NAME: &'static str = "SearchResult";
    const FIELDS: &'static [&'static str] =
        &["id", "result_metadata", "body", "title", "url", "highlight"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            id: reader.required("id")?,
            result_metadata: reader.required_model("result_metadata")?,
            body: reader.optional("body")?,
            title: reader.optional("title")?,
            url: reader.optional("url")?,
            highlight: reader.optional_model("highlight")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .field("id", &self.id)
            .model("result_metadata", &self.result_metadata)
            .optional("body", &self.body)
            .optional("title", &self.title)
            .optional("url", &self.url)
            .optional_model("highlight", &self.highlight)
            .finish()
    }
}

/// Highlighted segments of a search result, keyed by document field.
///
/// Open model: highlights for fields beyond `body`, `title` and `url` land in
/// `additional_properties` and are emitted again after the declared fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResultHighlight {
    /// Segments from the body field.
    pub body: Option<Vec<String>>,
    /// Segments from the title field.
    pub title: Option<Vec<String>>,
    /// Segments from the url field.
    pub url: Option<Vec<String>>,
    /// Highlights for any other document field.
    pub additional_properties: JsonMap,
}

impl Model for SearchResultHighlight {
    const NAME: &'static str = "SearchResultHighlight";
    const FIELDS: &'static [&'static str] = &["body", "title", "url"];
    const SHAPE: Shape = Shape::Open;

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            body: reader.optional("body")?,
            title: reader.optional("title")?,
            url: reader.optional("url")?,
            additional_properties: reader.into_residual(),
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .optional("body", &self.body)
            .optional("title", &self.title)
            .optional("url", &self.url)
            .residual(&self.additional_properties)
            .finish()
    }
}

/// Ranking information for a search result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResultMetadata {
    /// Confidence score between 0 and 1.
    pub confidence: Option<f64>,
    /// Unnormalized relevance score.
    pub score: Option<f64>,
}

impl Model for SearchResultMetadata {
    const NAME: &'static str = "SearchResultMetadata";
    const FIELDS: &'static [&'static str] = &["confidence", "score"];

    fn from_dict(dict: JsonMap) -> ModelResult<Self> {
        let mut reader = DictReader::new::<Self>(dict)?;
        Ok(Self {
            confidence: reader.optional("confidence")?,
            score: reader.optional("score")?,
        })
    }

    fn to_dict(&self) -> JsonMap {
        DictWriter::new()
            .optional("confidence", &self.confidence)
            .optional("score", &self.score)
            .finish()
    }
}

crate::model_traits!(SearchResult, SearchResultHighlight, SearchResultMetadata);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ModelError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_highlight_keeps_extra_fields() {
        let value = json!({"body": ["a"], "x_custom": ["b"]});
        let highlight = SearchResultHighlight::from_value(value.clone()).unwrap();

        assert_eq!(highlight.body, Some(vec!["a".to_string()]));
        assert_eq!(highlight.title, None);
        assert_eq!(highlight.additional_properties.len(), 1);
        assert_eq!(highlight.additional_properties["x_custom"], json!(["b"]));
        assert_eq!(highlight.to_value(), value);
    }

    #[test]
    fn test_highlight_residual_never_shadows_declared() {
        let mut highlight = SearchResultHighlight {
            title: Some(vec!["typed".to_string()]),
            ..SearchResultHighlight::default()
        };
        highlight
            .additional_properties
            .insert("title".to_string(), json!(["shadow"]));

        assert_eq!(highlight.to_value(), json!({"title": ["typed"]}));
    }

    #[test]
    fn test_highlight_declared_field_type_is_checked() {
        let error = SearchResultHighlight::from_value(json!({"body": "not a list"})).unwrap_err();
        assert!(matches!(
            error,
            ModelError::InvalidField { model: "SearchResultHighlight", field: "body", .. }
        ));
    }

    #[test]
    fn test_result_requires_metadata() {
        let error = SearchResult::from_value(json!({"id": "doc-1"})).unwrap_err();
        assert_eq!(error, ModelError::missing("SearchResult", "result_metadata"));
    }

    #[test]
    fn test_result_round_trip() {
        let value = json!({
            "id": "doc-1",
            "result_metadata": {"confidence": 0.31, "score": 12.4},
            "title": "Return policy",
            "highlight": {"body": ["<em>returns</em> within 30 days"], "subtitle": ["Policy"]}
        });

        let result = SearchResult::from_value(value.clone()).unwrap();
        assert_eq!(result.result_metadata.score, Some(12.4));
        assert_eq!(result.to_value(), value);
    }
}
