use anyhow::{Result, bail};
use helpcenter_core::constants::SEARCH_FAILED;
use helpcenter_core::{TransitionRequest, ViewState};
use helpcenter_widget::Widget;

use super::output::{print_content, print_overlay};
use crate::OutputFormat;

pub(crate) async fn run_home(widget: &Widget, format: OutputFormat) -> Result<()> {
    widget.connect().await;
    finish_view(widget, format)
}

pub(crate) async fn run_section(
    widget: &Widget,
    id: u64,
    category: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    widget.navigate(TransitionRequest::Section { section_id: id, category_name: category }).await;
    finish_view(widget, format)
}

pub(crate) async fn run_article(widget: &Widget, id: u64, format: OutputFormat) -> Result<()> {
    widget.navigate(TransitionRequest::Article { article_id: id, section: None }).await;
    finish_view(widget, format)
}

pub(crate) async fn run_search(widget: &Widget, query: &str, format: OutputFormat) -> Result<()> {
    let min = widget.config().min_query_chars;
    if query.chars().count() < min {
        bail!("search query must be at least {min} characters");
    }
    widget.search_now(query).await;
    let overlay = widget.overlay();
    print_overlay(&overlay, format)?;
    if overlay.notice.as_deref() == Some(SEARCH_FAILED) {
        bail!("{SEARCH_FAILED}");
    }
    Ok(())
}

/// Prints the content region and turns an error view into a failing exit.
fn finish_view(widget: &Widget, format: OutputFormat) -> Result<()> {
    print_content(widget, format)?;
    if let Some(ViewState::Error { message }) = widget.view_state() {
        bail!(message);
    }
    Ok(())
}
