//! Outbound client for the upstream content services.
//!
//! # Responsibilities
//! - Hold the upstream URL table (hot-swappable)
//! - POST a JSON body to one upstream, one attempt per call
//! - Check the upstream body is JSON regardless of its status code
//!
//! # Design Decisions
//! - No retries: the upstream calls generate content and are not idempotent
//! - The upstream HTTP status is not interpreted; its JSON body is the answer
//! - `relay` hands back the upstream bytes untouched so the API routes return
//!   exactly what the upstream sent

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use arc_swap::ArcSwap;
use axum::body::Bytes;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::IgnoredAny;
use serde_json::Value;

use crate::config::schema::{TimeoutConfig, UpstreamsConfig};
use crate::gateway::{Capability, ProxyError};
use crate::observability::metrics;

/// Something that can forward a JSON body to a capability's upstream.
///
/// Page handlers are written against this trait so that tests can substitute
/// a scripted gateway.
pub trait Gateway: Send + Sync {
    fn forward(
        &self,
        capability: Capability,
        body: Value,
    ) -> impl Future<Output = Result<Value, ProxyError>> + Send;
}

/// reqwest-backed [`Gateway`] talking to the configured upstreams.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    upstreams: Arc<ArcSwap<UpstreamsConfig>>,
}

impl UpstreamClient {
    /// Build a client for the given upstream table.
    pub fn new(upstreams: UpstreamsConfig, timeouts: &TimeoutConfig) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .timeout(Duration::from_secs(timeouts.upstream_secs))
            .user_agent(concat!("content-agent/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            upstreams: Arc::new(ArcSwap::from_pointee(upstreams)),
        })
    }

    /// Replace the upstream table. In-flight calls keep the URL they started with.
    pub fn update_upstreams(&self, upstreams: UpstreamsConfig) {
        self.upstreams.store(Arc::new(upstreams));
    }

    /// Current URL for a capability.
    pub fn upstream_url(&self, capability: Capability) -> String {
        self.upstreams.load().endpoint(capability).url.clone()
    }

    /// Forward an inbound body as-is and return the upstream body as-is.
    ///
    /// Both sides must be valid JSON; nothing is re-encoded.
    pub async fn relay(&self, capability: Capability, inbound: Bytes) -> Result<Bytes, ProxyError> {
        serde_json::from_slice::<IgnoredAny>(&inbound).map_err(ProxyError::InvalidRequest)?;

        let (status, bytes) = self.post(capability, inbound).await?;
        serde_json::from_slice::<IgnoredAny>(&bytes).map_err(|source| {
            ProxyError::MalformedResponse {
                status: status.as_u16(),
                source,
            }
        })?;

        Ok(bytes)
    }

    async fn post(&self, capability: Capability, body: Bytes) -> Result<(StatusCode, Bytes), ProxyError> {
        let url = self.upstream_url(capability);
        let start = Instant::now();

        tracing::debug!(capability = %capability, url = %url, "Forwarding to upstream");

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                metrics::record_upstream(capability, "error", start);
                return Err(e.into());
            }
        };

        let status = response.status();
        let bytes = response.bytes().await?;
        metrics::record_upstream(capability, status.as_str(), start);

        tracing::debug!(
            capability = %capability,
            status = %status,
            bytes = bytes.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Upstream responded"
        );

        Ok((status, bytes))
    }
}

impl Gateway for UpstreamClient {
    async fn forward(&self, capability: Capability, body: Value) -> Result<Value, ProxyError> {
        let encoded = serde_json::to_vec(&body).map_err(ProxyError::InvalidRequest)?;
        let (status, bytes) = self.post(capability, Bytes::from(encoded)).await?;

        serde_json::from_slice(&bytes).map_err(|source| ProxyError::MalformedResponse {
            status: status.as_u16(),
            source,
        })
    }
}
