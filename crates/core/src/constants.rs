//! Shared constants for helpcenter.

/// Locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "en-us";

/// Template for the tenant's help-center API root.
pub const BASE_URL_TEMPLATE: &str = "https://{subdomain}.zendesk.com/api/v2/help_center";

/// Queries shorter than this (in characters) hide the overlay without a request.
pub const MIN_QUERY_CHARS: usize = 3;

/// Maximum number of search results shown in the overlay.
pub const MAX_SEARCH_RESULTS: usize = 5;

/// Quiet period after the last keystroke before a search is issued.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Per-request timeout for help-center calls.
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Maximum bytes of an error body kept in `FetchError::Status`.
pub const MAX_ERROR_BODY_LEN: usize = 200;

pub const HOME_LOAD_FAILED: &str = "Failed to load help center categories";
pub const SECTION_LOAD_FAILED: &str = "Failed to load section";
pub const ARTICLE_LOAD_FAILED: &str = "Failed to load article";

pub const NO_RESULTS: &str = "No results found";
pub const SEARCH_FAILED: &str = "Error searching articles";
