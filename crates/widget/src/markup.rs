//! Rendered markup and the interactive affordances embedded in it.
//!
//! Every interactive element carries a `data-affordance="<render>:<index>"`
//! attribute. The attribute is only a handle: what a click does is the typed
//! [`TransitionRequest`] stored next to it in [`Rendered::affordances`].

use std::fmt;
use std::str::FromStr;

use helpcenter_core::TransitionRequest;
use serde::Serialize;

/// Handle of one interactive element.
///
/// Unique within one region (content or overlay) across renders. The two
/// regions number their renders independently, so a click chain must be
/// resolved against the region it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AffordanceId {
    pub render: u64,
    pub index: u32,
}

impl fmt::Display for AffordanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.render, self.index)
    }
}

impl FromStr for AffordanceId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (render, index) =
            s.split_once(':').ok_or_else(|| format!("Invalid affordance id: {s}"))?;
        let render = render.parse().map_err(|_| format!("Invalid affordance id: {s}"))?;
        let index = index.parse().map_err(|_| format!("Invalid affordance id: {s}"))?;
        Ok(Self { render, index })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AffordanceKind {
    SectionItem,
    ArticleLink,
    BackButton,
    Breadcrumb,
    SearchResult,
}

impl AffordanceKind {
    /// CSS class of the element carrying this affordance.
    #[must_use]
    pub const fn class(&self) -> &'static str {
        match *self {
            Self::SectionItem => "section-item",
            Self::ArticleLink => "article-link",
            Self::BackButton => "back-button",
            Self::Breadcrumb => "breadcrumb-item",
            Self::SearchResult => "result-item",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Affordance {
    pub id: AffordanceId,
    pub kind: AffordanceKind,
    pub label: String,
    pub request: TransitionRequest,
}

/// Markup for one region plus its interactive affordances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub html: String,
    pub affordances: Vec<Affordance>,
    /// Breadcrumb labels, outermost first. Empty for views without one.
    pub breadcrumb: Vec<String>,
}

impl Rendered {
    #[must_use]
    pub fn affordance(&self, id: AffordanceId) -> Option<&Affordance> {
        self.affordances.iter().find(|a| a.id == id)
    }

    #[must_use]
    pub fn affordances_of(&self, kind: AffordanceKind) -> Vec<&Affordance> {
        self.affordances.iter().filter(|a| a.kind == kind).collect()
    }

    /// Breadcrumb as displayed, e.g. `Categories / Billing / Invoices`.
    #[must_use]
    pub fn breadcrumb_trail(&self) -> String {
        self.breadcrumb.join(" / ")
    }
}

/// Accumulates HTML and hands out affordance ids for a single render.
pub(crate) struct MarkupBuilder {
    render: u64,
    html: String,
    affordances: Vec<Affordance>,
    breadcrumb: Vec<String>,
}

impl MarkupBuilder {
    pub(crate) const fn new(render: u64) -> Self {
        Self { render, html: String::new(), affordances: Vec::new(), breadcrumb: Vec::new() }
    }

    pub(crate) fn push(&mut self, html: &str) {
        self.html.push_str(html);
    }

    /// Text node content, escaped.
    pub(crate) fn text(&mut self, text: &str) {
        self.html.push_str(&escape_html(text));
    }

    /// Registers an affordance and returns the attribute to put on its element.
    pub(crate) fn affordance(
        &mut self,
        kind: AffordanceKind,
        label: &str,
        request: TransitionRequest,
    ) -> String {
        let index = u32::try_from(self.affordances.len()).unwrap_or(u32::MAX);
        let id = AffordanceId { render: self.render, index };
        self.affordances.push(Affordance { id, kind, label: label.to_owned(), request });
        format!("data-affordance=\"{id}\"")
    }

    /// Renders a breadcrumb trail. Items with a request are interactive.
    pub(crate) fn breadcrumb(&mut self, items: Vec<(String, Option<TransitionRequest>)>) {
        self.push("<div class=\"breadcrumb\">");
        for (position, (label, request)) in items.into_iter().enumerate() {
            if position > 0 {
                self.push("<span class=\"breadcrumb-separator\">/</span>");
            }
            match request {
                Some(request) => {
                    let attr = self.affordance(AffordanceKind::Breadcrumb, &label, request);
                    self.push(&format!("<span class=\"breadcrumb-item\" {attr}>"));
                },
                None => self.push("<span class=\"breadcrumb-item current\">"),
            }
            self.text(&label);
            self.push("</span>");
            self.breadcrumb.push(label);
        }
        self.push("</div>");
    }

    pub(crate) fn finish(self) -> Rendered {
        Rendered { html: self.html, affordances: self.affordances, breadcrumb: self.breadcrumb }
    }
}

/// Escapes text for use in element content and double-quoted attributes.
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
