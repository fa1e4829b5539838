use anyhow::Result;
use helpcenter_core::ViewState;
use helpcenter_widget::{Overlay, Rendered, Widget};

use crate::OutputFormat;

pub(crate) fn print_content(widget: &Widget, format: OutputFormat) -> Result<()> {
    let content = widget.content();
    match format {
        OutputFormat::Html => println!("{}", content.html),
        OutputFormat::Text => print!("{}", content_text(widget.view_state().as_ref(), &content)),
        OutputFormat::Json => {
            let body = serde_json::json!({"view": widget.view_state(), "content": content});
            println!("{}", serde_json::to_string_pretty(&body)?);
        },
    }
    Ok(())
}

pub(crate) fn print_overlay(overlay: &Overlay, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Html => println!("{}", overlay.rendered.html),
        OutputFormat::Text => print!("{}", overlay_text(overlay)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(overlay)?),
    }
    Ok(())
}

/// Breadcrumb, then the interactive items numbered from 1.
pub(crate) fn content_text(view: Option<&ViewState>, content: &Rendered) -> String {
    let mut out = String::new();
    if let Some(ViewState::Error { message }) = view {
        out.push_str(&format!("{message}. Please try again later.\n"));
        return out;
    }
    if !content.breadcrumb.is_empty() {
        out.push_str(&content.breadcrumb_trail());
        out.push('\n');
    }
    for (n, affordance) in content.affordances.iter().enumerate() {
        out.push_str(&format!("  [{}] {} ({})\n", n + 1, affordance.label, affordance.kind.class()));
    }
    out
}

/// Result rows numbered `r1..`, or the placeholder text.
pub(crate) fn overlay_text(overlay: &Overlay) -> String {
    if !overlay.visible {
        return String::new();
    }
    if let Some(notice) = &overlay.notice {
        return format!("{notice}\n");
    }
    overlay
        .rendered
        .affordances
        .iter()
        .enumerate()
        .map(|(n, a)| format!("  [r{}] {}\n", n + 1, a.label))
        .collect()
}
