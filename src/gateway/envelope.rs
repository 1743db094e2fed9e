//! Interpreting upstream payloads on behalf of the pages.
//!
//! Every upstream answers `{ success, data?, message? }`. The API routes relay
//! that envelope untouched; pages unwrap it through [`fetch`], which turns the
//! three ways a call can go wrong into one [`FetchFailure`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::gateway::{Capability, Gateway, ProxyError, GENERIC_FAILURE};

/// Upstream response shape.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamEnvelope<T> {
    /// A missing flag reads as failure.
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

/// Why a page could not obtain its data.
#[derive(Debug, Error)]
pub enum FetchFailure {
    /// The gateway itself failed (transport, timeout, non-JSON body).
    #[error(transparent)]
    Gateway(#[from] ProxyError),

    /// The upstream answered with `success: false`.
    #[error("upstream reported failure: {}", .message.as_deref().unwrap_or("<no message>"))]
    Rejected { message: Option<String> },

    /// The upstream claimed success but `data` is missing or has the wrong shape.
    #[error("upstream data has unexpected shape: {0}")]
    Malformed(String),
}

impl FetchFailure {
    /// Stable label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchFailure::Gateway(e) => e.kind(),
            FetchFailure::Rejected { .. } => "rejected",
            FetchFailure::Malformed(_) => "malformed_data",
        }
    }

    /// Safe text shown to the user.
    ///
    /// Gateway failures and logical rejections both reach the page as a
    /// `success: false` envelope, so they share the capability's message.
    /// Only data the page cannot render falls back to the generic text.
    pub fn user_message(&self, capability: Capability) -> &'static str {
        match self {
            FetchFailure::Gateway(_) | FetchFailure::Rejected { .. } => {
                capability.failure_message()
            }
            FetchFailure::Malformed(_) => GENERIC_FAILURE,
        }
    }
}

/// Calls `capability` with `body` and unwraps the envelope into `T`.
pub async fn fetch<T, G>(gateway: &G, capability: Capability, body: Value) -> Result<T, FetchFailure>
where
    T: DeserializeOwned,
    G: Gateway,
{
    let payload = gateway.forward(capability, body).await?;
    unwrap_envelope(payload)
}

/// Unwraps an already-received payload.
pub fn unwrap_envelope<T: DeserializeOwned>(payload: Value) -> Result<T, FetchFailure> {
    // Anything that is not an envelope object reads as an unflagged failure.
    let envelope: UpstreamEnvelope<Value> = match serde_json::from_value(payload) {
        Ok(envelope) => envelope,
        Err(_) => return Err(FetchFailure::Rejected { message: None }),
    };

    if !envelope.success {
        return Err(FetchFailure::Rejected {
            message: envelope.message,
        });
    }

    let data = envelope
        .data
        .ok_or_else(|| FetchFailure::Malformed("missing data".to_string()))?;
    serde_json::from_value(data).map_err(|e| FetchFailure::Malformed(e.to_string()))
}
