//! Remote content gateway abstraction
//!
//! The widget only ever talks to the help center through [`ContentGateway`].
//! The reqwest client implements it for production; tests plug in fakes.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::FetchError;
use crate::models::{
    Article, ArticleEnvelope, ArticlesEnvelope, CategoriesEnvelope, Category, SearchEnvelope,
    SearchResult, Section, SectionEnvelope, SectionsEnvelope,
};
use crate::resource::Resource;

/// Read-only access to help-center resources as raw JSON.
#[async_trait]
pub trait ContentGateway: Send + Sync {
    /// Fetch one resource. Exactly one attempt is made.
    async fn fetch(&self, resource: &Resource) -> Result<Value, FetchError>;
}

/// Typed accessors over any [`ContentGateway`], unwrapping the API envelopes.
#[async_trait]
pub trait HelpCenterApi {
    async fn categories(&self) -> Result<Vec<Category>, FetchError>;
    async fn category_sections(&self, category_id: u64) -> Result<Vec<Section>, FetchError>;
    async fn section(&self, section_id: u64) -> Result<Section, FetchError>;
    async fn section_articles(&self, section_id: u64) -> Result<Vec<Article>, FetchError>;
    async fn article(&self, article_id: u64) -> Result<Article, FetchError>;
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, FetchError>;
}

#[async_trait]
impl<G: ContentGateway + ?Sized> HelpCenterApi for G {
    async fn categories(&self) -> Result<Vec<Category>, FetchError> {
        let envelope: CategoriesEnvelope = fetch_decoded(self, Resource::Categories).await?;
        Ok(envelope.categories)
    }

    async fn category_sections(&self, category_id: u64) -> Result<Vec<Section>, FetchError> {
        let envelope: SectionsEnvelope =
            fetch_decoded(self, Resource::CategorySections { category_id }).await?;
        Ok(envelope.sections)
    }

    async fn section(&self, section_id: u64) -> Result<Section, FetchError> {
        let envelope: SectionEnvelope = fetch_decoded(self, Resource::Section { section_id }).await?;
        Ok(envelope.section)
    }

    async fn section_articles(&self, section_id: u64) -> Result<Vec<Article>, FetchError> {
        let envelope: ArticlesEnvelope =
            fetch_decoded(self, Resource::SectionArticles { section_id }).await?;
        Ok(envelope.articles)
    }

    async fn article(&self, article_id: u64) -> Result<Article, FetchError> {
        let envelope: ArticleEnvelope = fetch_decoded(self, Resource::Article { article_id }).await?;
        Ok(envelope.article)
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, FetchError> {
        let envelope: SearchEnvelope =
            fetch_decoded(self, Resource::Search { query: query.to_owned() }).await?;
        Ok(envelope.results)
    }
}

async fn fetch_decoded<G, T>(gateway: &G, resource: Resource) -> Result<T, FetchError>
where
    G: ContentGateway + ?Sized,
    T: DeserializeOwned,
{
    let value = gateway.fetch(&resource).await?;
    serde_json::from_value(value)
        .map_err(|source| FetchError::Decode { resource: resource.to_string(), source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Canned(Value);

    #[async_trait]
    impl ContentGateway for Canned {
        async fn fetch(&self, _resource: &Resource) -> Result<Value, FetchError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_unwraps_categories_envelope() {
        let gateway = Canned(json!({"categories": [{"id": 1, "name": "Billing"}]}));
        let categories = gateway.categories().await.unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Billing");
    }

    #[tokio::test]
    async fn test_wrong_envelope_is_decode_error() {
        let gateway = Canned(json!({"sections": []}));
        let err = gateway.article(5).await.unwrap_err();
        match err {
            FetchError::Decode { resource, .. } => assert_eq!(resource, "articles/5.json"),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_works_through_trait_object() {
        let gateway: Box<dyn ContentGateway> = Box::new(Canned(json!({"results": []})));
        assert!(gateway.search("invoice").await.unwrap().is_empty());
    }
}
