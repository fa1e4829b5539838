//! Widget configuration: the two mount attributes plus tuning knobs.

use std::time::Duration;

use crate::constants::{
    BASE_URL_TEMPLATE, DEFAULT_LOCALE, MAX_SEARCH_RESULTS, MIN_QUERY_CHARS,
    REQUEST_TIMEOUT_SECS, SEARCH_DEBOUNCE_MS,
};
use crate::env_config::{env_non_empty, env_parse_with_default};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    subdomain: String,
    locale: String,
    base_url: Option<String>,
    pub search_debounce: Duration,
    pub min_query_chars: usize,
    pub max_search_results: usize,
    pub request_timeout: Duration,
}

impl WidgetConfig {
    /// Creates a configuration for the given help-center tenant.
    ///
    /// # Errors
    /// Returns an error if the subdomain is empty or contains characters that
    /// cannot appear in a hostname label.
    pub fn new(subdomain: &str) -> Result<Self, ConfigError> {
        let subdomain = subdomain.trim();
        if subdomain.is_empty() {
            return Err(ConfigError::MissingSubdomain);
        }
        let valid = subdomain
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid || subdomain.starts_with('-') || subdomain.ends_with('-') {
            return Err(ConfigError::InvalidSubdomain(subdomain.to_owned()));
        }
        Ok(Self {
            subdomain: subdomain.to_owned(),
            locale: DEFAULT_LOCALE.to_owned(),
            base_url: None,
            search_debounce: Duration::from_millis(SEARCH_DEBOUNCE_MS),
            min_query_chars: MIN_QUERY_CHARS,
            max_search_results: MAX_SEARCH_RESULTS,
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        })
    }

    /// Builds a configuration from `HELPCENTER_*` environment variables.
    ///
    /// # Errors
    /// Returns an error if `HELPCENTER_SUBDOMAIN` is unset or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let subdomain = env_non_empty("HELPCENTER_SUBDOMAIN").ok_or(ConfigError::MissingSubdomain)?;
        Ok(Self::new(&subdomain)?.with_env_overrides())
    }

    /// Applies every `HELPCENTER_*` variable except the subdomain.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(locale) = env_non_empty("HELPCENTER_LOCALE") {
            self = self.with_locale(&locale);
        }
        if let Some(base_url) = env_non_empty("HELPCENTER_BASE_URL") {
            self = self.with_base_url(&base_url);
        }
        self.search_debounce = Duration::from_millis(env_parse_with_default(
            "HELPCENTER_SEARCH_DEBOUNCE_MS",
            SEARCH_DEBOUNCE_MS,
        ));
        self.request_timeout = Duration::from_secs(env_parse_with_default(
            "HELPCENTER_TIMEOUT_SECS",
            REQUEST_TIMEOUT_SECS,
        ));
        self
    }

    /// Sets the locale. An empty locale keeps the default.
    #[must_use]
    pub fn with_locale(mut self, locale: &str) -> Self {
        let locale = locale.trim();
        self.locale = if locale.is_empty() { DEFAULT_LOCALE.to_owned() } else { locale.to_owned() };
        self
    }

    /// Replaces the whole API root, e.g. to go through a proxy.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.trim_end_matches('/').to_owned());
        self
    }

    #[must_use]
    pub fn subdomain(&self) -> &str {
        &self.subdomain
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// API root for this tenant, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| BASE_URL_TEMPLATE.replace("{subdomain}", &self.subdomain))
    }
}
