//! Addressable help-center resources.

use std::fmt;

/// One read-only endpoint of the help-center API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resource {
    Categories,
    CategorySections { category_id: u64 },
    Section { section_id: u64 },
    SectionArticles { section_id: u64 },
    Article { article_id: u64 },
    Search { query: String },
}

impl Resource {
    /// Path relative to the locale root, or to the API root for search.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Categories => "categories.json".to_owned(),
            Self::CategorySections { category_id } => {
                format!("categories/{category_id}/sections.json")
            },
            Self::Section { section_id } => format!("sections/{section_id}.json"),
            Self::SectionArticles { section_id } => format!("sections/{section_id}/articles.json"),
            Self::Article { article_id } => format!("articles/{article_id}.json"),
            Self::Search { .. } => "articles/search".to_owned(),
        }
    }

    /// Search is the only locale-agnostic endpoint.
    #[must_use]
    pub const fn is_search(&self) -> bool {
        matches!(self, Self::Search { .. })
    }

    /// Query-string pairs to append to the path.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::Search { query } => vec![("query", query.as_str())],
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search { query } => write!(f, "articles/search?query={query:?}"),
            other => f.write_str(&other.path()),
        }
    }
}
