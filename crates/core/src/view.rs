//! View states and the typed requests that move between them.

use serde::Serialize;

/// Where an article sits in the hierarchy, as known to whoever linked to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionContext {
    pub section_id: u64,
    pub section_name: String,
    pub category_name: Option<String>,
}

/// A navigation the user asked for.
///
/// Each variant carries all the context the target view needs; `None` means
/// the context is genuinely unknown (e.g. an article opened from search).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum TransitionRequest {
    Home,
    Section { section_id: u64, category_name: Option<String> },
    Article { article_id: u64, section: Option<SectionContext> },
}

/// The view currently shown in the content region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum ViewState {
    Home,
    Section { section_id: u64, category_name: Option<String> },
    Article { article_id: u64, section: Option<SectionContext> },
    Error { message: String },
}

impl ViewState {
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

impl From<TransitionRequest> for ViewState {
    fn from(request: TransitionRequest) -> Self {
        match request {
            TransitionRequest::Home => Self::Home,
            TransitionRequest::Section { section_id, category_name } => {
                Self::Section { section_id, category_name }
            },
            TransitionRequest::Article { article_id, section } => Self::Article { article_id, section },
        }
    }
}
