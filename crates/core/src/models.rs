//! Help-center entities and the JSON envelopes the API wraps them in.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: u64,
    pub title: String,
    /// Rich text as HTML. Inserted into the article view without escaping.
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub section_id: Option<u64>,
}

/// Projection of an article returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: u64,
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct CategoriesEnvelope {
    pub categories: Vec<Category>,
}

#[derive(Debug, Deserialize)]
pub struct SectionsEnvelope {
    pub sections: Vec<Section>,
}

#[derive(Debug, Deserialize)]
pub struct SectionEnvelope {
    pub section: Section,
}

#[derive(Debug, Deserialize)]
pub struct ArticlesEnvelope {
    pub articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
pub struct ArticleEnvelope {
    pub article: Article,
}

#[derive(Debug, Deserialize)]
pub struct SearchEnvelope {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_tolerates_null_description() {
        let json = r#"{"id": 10, "name": "Invoices", "description": null, "category_id": 1}"#;
        let section: Section = serde_json::from_str(json).unwrap();
        assert_eq!(section.description, None);
        assert_eq!(section.category_id, Some(1));
    }

    #[test]
    fn test_article_ignores_unknown_fields() {
        let json = r#"{"id": 5, "title": "Invoice FAQ", "body": "<p>Hi</p>", "draft": false, "vote_sum": 3}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.body.as_deref(), Some("<p>Hi</p>"));
        assert_eq!(article.section_id, None);
    }

    #[test]
    fn test_search_envelope_missing_results_is_empty() {
        let envelope: SearchEnvelope = serde_json::from_str(r#"{"count": 0}"#).unwrap();
        assert!(envelope.results.is_empty());
    }
}
