//! Search overlay rendering.

use helpcenter_core::{SearchResult, TransitionRequest};
use serde::Serialize;

use crate::markup::{AffordanceKind, MarkupBuilder, Rendered};

/// The transient result dropdown under the search input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Overlay {
    pub visible: bool,
    pub rendered: Rendered,
    /// Text of the non-interactive placeholder row, when one is shown.
    pub notice: Option<String>,
}

impl Overlay {
    #[must_use]
    pub fn hidden() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn shown(rendered: Rendered) -> Self {
        Self { visible: true, rendered, notice: None }
    }

    /// A visible overlay holding a single placeholder row.
    #[must_use]
    pub fn notice(message: &str) -> Self {
        Self { visible: true, rendered: render_placeholder(message), notice: Some(message.to_owned()) }
    }
}

/// Up to `max` clickable rows; each opens the article with no section context.
pub fn render_results(render: u64, results: &[SearchResult], max: usize) -> Rendered {
    let mut m = MarkupBuilder::new(render);
    for result in results.iter().take(max) {
        let attr = m.affordance(
            AffordanceKind::SearchResult,
            &result.title,
            TransitionRequest::Article { article_id: result.id, section: None },
        );
        m.push(&format!("<div class=\"result-item\" {attr} data-article-id=\"{}\">", result.id));
        m.text(&result.title);
        m.push("</div>");
    }
    m.finish()
}

/// A single non-interactive row such as "No results found".
pub fn render_placeholder(message: &str) -> Rendered {
    let mut m = MarkupBuilder::new(0);
    m.push("<div class=\"result-item\">");
    m.text(message);
    m.push("</div>");
    m.finish()
}
