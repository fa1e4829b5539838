//! Typed error enums shared by every helpcenter crate.

use thiserror::Error;

/// Failure of a single help-center API call.
///
/// Every call is one attempt. Callers degrade to an error view or a
/// placeholder row instead of retrying.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, timeout or body-read failure before a status was known.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The API answered with a non-success status.
    #[error("HTTP status {code}: {body}")]
    Status { code: u16, body: String },

    /// The body was not JSON or did not match the expected envelope.
    #[error("malformed response for {resource}: {source}")]
    Decode {
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    /// The HTTP client could not be built (TLS backend failure).
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl FetchError {
    /// HTTP status carried by this error, when the server answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match *self {
            Self::Status { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// Invalid widget configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("subdomain is required (set HELPCENTER_SUBDOMAIN or pass --subdomain)")]
    MissingSubdomain,

    #[error("invalid subdomain {0:?}: only lowercase letters, digits and '-' are allowed")]
    InvalidSubdomain(String),
}
