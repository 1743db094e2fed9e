//! Gateway error kinds.

use thiserror::Error;

/// Why a single forwarded call failed.
///
/// Callers only ever see a fixed message; the variant and its detail are
/// kept for logs.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The inbound body was not JSON.
    #[error("request body is not valid JSON: {0}")]
    InvalidRequest(#[source] serde_json::Error),

    /// The upstream could not be reached or the connection broke.
    #[error("upstream transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// The upstream did not answer within the configured deadline.
    #[error("upstream timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// The upstream answered but the body was not JSON.
    #[error("upstream returned malformed JSON (status {status}): {source}")]
    MalformedResponse {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

impl ProxyError {
    /// Stable label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ProxyError::InvalidRequest(_) => "invalid_request",
            ProxyError::Transport(_) => "transport",
            ProxyError::Timeout(_) => "timeout",
            ProxyError::MalformedResponse { .. } => "malformed_response",
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProxyError::Timeout(e)
        } else {
            ProxyError::Transport(e)
        }
    }
}
