//! Help-center widget: drill-down navigation and debounced search over a
//! [`ContentGateway`](helpcenter_core::ContentGateway).
//!
//! The widget is host-agnostic. It renders HTML for a content region and a
//! results overlay, and accepts clicks as chains of affordance ids.

pub mod dispatch;
pub mod markup;
pub mod renderer;
pub mod search;
mod widget;

#[cfg(test)]
mod test_support;

pub use markup::{Affordance, AffordanceId, AffordanceKind, Rendered, escape_html};
pub use search::Overlay;
pub use widget::{TransitionOutcome, Widget};
