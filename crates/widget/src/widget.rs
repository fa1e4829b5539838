//! The widget instance: owns the content region, the results overlay and the
//! navigation memory, and applies async results only while they are current.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use helpcenter_core::constants::{
    ARTICLE_LOAD_FAILED, HOME_LOAD_FAILED, NO_RESULTS, SEARCH_FAILED, SECTION_LOAD_FAILED,
};
use helpcenter_core::{
    ContentGateway, FetchError, HelpCenterApi, NavigationContext, TransitionRequest, ViewState,
    WidgetConfig,
};
use tokio::task::JoinHandle;

use crate::dispatch;
use crate::markup::{AffordanceId, Rendered};
use crate::renderer;
use crate::search::{Overlay, render_results};

/// What happened to a transition once its data arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The view replaced the content region (possibly as an error view).
    Applied,
    /// A newer transition was started meanwhile; this result was dropped.
    Superseded,
}

#[derive(Debug, Default)]
struct WidgetState {
    content: Rendered,
    view: Option<ViewState>,
    overlay: Overlay,
    search_input: String,
    navigation: NavigationContext,
}

struct Inner {
    gateway: Arc<dyn ContentGateway>,
    config: WidgetConfig,
    view_generation: AtomicU64,
    search_generation: AtomicU64,
    pending_search: Mutex<Option<JoinHandle<()>>>,
    state: Mutex<WidgetState>,
}

/// Handle to one mounted widget. Clones share the same instance.
#[derive(Clone)]
pub struct Widget {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for Widget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Widget")
            .field("subdomain", &self.inner.config.subdomain())
            .field("locale", &self.inner.config.locale())
            .field("view", &self.view_state())
            .finish_non_exhaustive()
    }
}

impl Widget {
    #[must_use]
    pub fn new(gateway: Arc<dyn ContentGateway>, config: WidgetConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                gateway,
                config,
                view_generation: AtomicU64::new(0),
                search_generation: AtomicU64::new(0),
                pending_search: Mutex::new(None),
                state: Mutex::new(WidgetState::default()),
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &WidgetConfig {
        &self.inner.config
    }

    /// Renders the initial Home view.
    pub async fn connect(&self) -> TransitionOutcome {
        self.navigate(TransitionRequest::Home).await
    }

    // ── Views ───────────────────────────────────────────────────────────

    /// Enters the requested view, replacing the whole content region.
    ///
    /// Fetch failures degrade to an error view; nothing is propagated. The
    /// navigation context only changes when a Section view is actually shown.
    pub async fn navigate(&self, request: TransitionRequest) -> TransitionOutcome {
        let ticket = self.inner.view_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let gateway = self.inner.gateway.as_ref();

        let result: Result<Rendered, (&'static str, FetchError)> = match &request {
            TransitionRequest::Home => renderer::load_home(gateway)
                .await
                .map(|blocks| renderer::render_home(ticket, &blocks))
                .map_err(|e| (HOME_LOAD_FAILED, e)),
            TransitionRequest::Section { section_id, category_name } => {
                renderer::load_section(gateway, *section_id)
                    .await
                    .map(|page| renderer::render_section(ticket, &page, category_name.as_deref()))
                    .map_err(|e| (SECTION_LOAD_FAILED, e))
            },
            TransitionRequest::Article { article_id, section } => {
                renderer::load_article(gateway, *article_id)
                    .await
                    .map(|article| renderer::render_article(ticket, &article, section.as_ref()))
                    .map_err(|e| (ARTICLE_LOAD_FAILED, e))
            },
        };

        let (view, rendered) = match result {
            Ok(rendered) => (ViewState::from(request), rendered),
            Err((message, e)) => {
                tracing::warn!(error = %e, ?request, "{message}");
                (ViewState::Error { message: message.to_owned() }, renderer::render_error(message))
            },
        };
        self.apply_view(ticket, view, rendered)
    }

    fn apply_view(&self, ticket: u64, view: ViewState, rendered: Rendered) -> TransitionOutcome {
        let mut state = self.lock_state();
        let latest = self.inner.view_generation.load(Ordering::SeqCst);
        if ticket != latest {
            tracing::debug!(ticket, latest, ?view, "discarding superseded view");
            return TransitionOutcome::Superseded;
        }
        tracing::info!(?view, affordances = rendered.affordances.len(), "view applied");
        if let ViewState::Section { category_name, .. } = &view {
            state.navigation.enter_section(category_name.clone());
        }
        state.content = rendered;
        state.view = Some(view);
        TransitionOutcome::Applied
    }

    // ── Dispatch ────────────────────────────────────────────────────────

    /// Handles a click in the content region.
    ///
    /// `chain` lists the affordance ids on the clicked element and its
    /// ancestors, closest first. Returns `None` when nothing interactive was hit.
    pub async fn click(&self, chain: &[AffordanceId]) -> Option<TransitionOutcome> {
        let request = self.resolve_click(chain)?;
        Some(self.navigate(request).await)
    }

    fn resolve_click(&self, chain: &[AffordanceId]) -> Option<TransitionRequest> {
        let state = self.lock_state();
        let hit = dispatch::resolve(&state.content, chain);
        if hit.is_none() {
            tracing::debug!(?chain, "click matched no affordance");
        }
        hit.map(|a| a.request.clone())
    }

    /// Handles a click in the results overlay: clears the search, then opens
    /// the article.
    pub async fn click_result(&self, chain: &[AffordanceId]) -> Option<TransitionOutcome> {
        let request = self.take_result(chain)?;
        self.inner.search_generation.fetch_add(1, Ordering::SeqCst);
        self.abort_pending_search();
        Some(self.navigate(request).await)
    }

    fn take_result(&self, chain: &[AffordanceId]) -> Option<TransitionRequest> {
        let mut state = self.lock_state();
        let request = dispatch::resolve_result(&state.overlay.rendered, chain)?.request.clone();
        state.search_input.clear();
        state.overlay = Overlay::hidden();
        Some(request)
    }

    // ── Search ──────────────────────────────────────────────────────────

    /// Handles one keystroke in the search input.
    ///
    /// Short queries hide the overlay at once. Longer ones are issued after
    /// the configured quiet period; every call restarts the timer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn handle_query(&self, text: &str) {
        let mut pending = self.lock_pending();
        let ticket = self.inner.search_generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(handle) = pending.take() {
            handle.abort();
        }
        if !self.accept_query(text) {
            return;
        }

        let widget = self.clone();
        let query = text.to_owned();
        let debounce = self.inner.config.search_debounce;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            widget.run_search(ticket, &query).await;
        }));
    }

    /// Runs a query immediately, without debouncing.
    pub async fn search_now(&self, text: &str) {
        let ticket = self.inner.search_generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.abort_pending_search();
        if self.accept_query(text) {
            self.run_search(ticket, text).await;
        }
    }

    /// Waits for the pending debounced search, if any, to finish.
    pub async fn wait_for_search(&self) {
        let handle = self.lock_pending().take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                if !e.is_cancelled() {
                    tracing::warn!(error = %e, "search task failed");
                }
            }
        }
    }

    /// Records the input and hides the overlay when the query is too short.
    fn accept_query(&self, text: &str) -> bool {
        let mut state = self.lock_state();
        state.search_input = text.to_owned();
        if text.chars().count() < self.inner.config.min_query_chars {
            state.overlay = Overlay::hidden();
            return false;
        }
        true
    }

    async fn run_search(&self, ticket: u64, query: &str) {
        tracing::debug!(ticket, query, "searching articles");
        let overlay = match self.inner.gateway.as_ref().search(query).await {
            Ok(results) if results.is_empty() => Overlay::notice(NO_RESULTS),
            Ok(results) => Overlay::shown(render_results(
                ticket,
                &results,
                self.inner.config.max_search_results,
            )),
            Err(e) => {
                tracing::warn!(error = %e, query, "search failed");
                Overlay::notice(SEARCH_FAILED)
            },
        };

        let mut state = self.lock_state();
        let latest = self.inner.search_generation.load(Ordering::SeqCst);
        if ticket != latest {
            tracing::debug!(ticket, latest, query, "discarding superseded search results");
            return;
        }
        state.overlay = overlay;
    }

    fn abort_pending_search(&self) {
        if let Some(handle) = self.lock_pending().take() {
            handle.abort();
        }
    }

    // ── Accessors ───────────────────────────────────────────────────────

    /// Current content region.
    #[must_use]
    pub fn content(&self) -> Rendered {
        self.lock_state().content.clone()
    }

    /// Current results overlay.
    #[must_use]
    pub fn overlay(&self) -> Overlay {
        self.lock_state().overlay.clone()
    }

    /// View shown in the content region; `None` until the first view is applied.
    #[must_use]
    pub fn view_state(&self) -> Option<ViewState> {
        self.lock_state().view.clone()
    }

    #[must_use]
    pub fn navigation(&self) -> NavigationContext {
        self.lock_state().navigation.clone()
    }

    #[must_use]
    pub fn search_input(&self) -> String {
        self.lock_state().search_input.clone()
    }

    fn lock_state(&self) -> MutexGuard<'_, WidgetState> {
        self.inner.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.inner.pending_search.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
