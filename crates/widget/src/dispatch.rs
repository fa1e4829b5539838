//! Interaction dispatcher: maps a click to exactly one affordance.
//!
//! A click is described by the affordance ids found on the clicked element and
//! its ancestors, closest first. Hosts collect them by walking up from the
//! event target and reading each `data-affordance` attribute.

use crate::markup::{Affordance, AffordanceId, AffordanceKind, Rendered};

/// Content-region kinds in the order they win when several match one click.
pub const CONTENT_PRIORITY: [AffordanceKind; 4] = [
    AffordanceKind::SectionItem,
    AffordanceKind::ArticleLink,
    AffordanceKind::BackButton,
    AffordanceKind::Breadcrumb,
];

/// Resolves a click in the content region.
///
/// Ids that do not belong to `region` (stale renders, the overlay) are ignored.
#[must_use]
pub fn resolve<'a>(region: &'a Rendered, chain: &[AffordanceId]) -> Option<&'a Affordance> {
    let hits: Vec<&Affordance> = chain.iter().filter_map(|id| region.affordance(*id)).collect();
    CONTENT_PRIORITY
        .iter()
        .find_map(|kind| hits.iter().find(|a| a.kind == *kind).copied())
}

/// Resolves a click in the results overlay.
#[must_use]
pub fn resolve_result<'a>(overlay: &'a Rendered, chain: &[AffordanceId]) -> Option<&'a Affordance> {
    chain
        .iter()
        .filter_map(|id| overlay.affordance(*id))
        .find(|a| a.kind == AffordanceKind::SearchResult)
}
