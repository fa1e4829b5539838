use async_trait::async_trait;
use helpcenter_core::constants::MAX_ERROR_BODY_LEN;
use helpcenter_core::{ContentGateway, FetchError, Resource, WidgetConfig};
use serde_json::Value;

/// Client for help-center API calls.
///
/// Every call is a single GET; there are no retries. Callers decide how to
/// degrade on failure.
pub struct HelpCenterClient {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) locale: String,
}

impl std::fmt::Debug for HelpCenterClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HelpCenterClient")
            .field("base_url", &self.base_url)
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl HelpCenterClient {
    /// Creates a client for the tenant and locale in `config`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(config: &WidgetConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("helpcenter-widget/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url: config.base_url(), locale: config.locale().to_owned() })
    }

    /// Returns the API root.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the locale used for scoped resources.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Absolute URL of `resource`, without its query string.
    #[must_use]
    pub fn url_for(&self, resource: &Resource) -> String {
        if resource.is_search() {
            format!("{}/{}", self.base_url, resource.path())
        } else {
            format!("{}/{}/{}", self.base_url, self.locale, resource.path())
        }
    }

    async fn get_json(&self, resource: &Resource, url: &str) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(url)
            .query(&resource.query_pairs())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body =
                response.text().await.unwrap_or_else(|_| "Could not read error body".to_owned());
            return Err(FetchError::Status {
                code: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY_LEN).to_owned(),
            });
        }

        let body = response.text().await.map_err(|e| FetchError::Transport(e.to_string()))?;
        serde_json::from_str(&body)
            .map_err(|source| FetchError::Decode { resource: resource.to_string(), source })
    }
}

#[async_trait]
impl ContentGateway for HelpCenterClient {
    async fn fetch(&self, resource: &Resource) -> Result<Value, FetchError> {
        let url = self.url_for(resource);
        tracing::debug!(%url, %resource, "fetching help center resource");
        let result = self.get_json(resource, &url).await;
        if let Err(ref e) = result {
            tracing::warn!(%url, status = ?e.status(), error = %e, "help center API error");
        }
        result
    }
}

/// Longest prefix of `s` that fits in `max_len` bytes without splitting a char.
pub(crate) fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let end = (0..=max_len).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0);
    s.get(..end).unwrap_or("")
}
