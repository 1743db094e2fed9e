//! Same-origin JSON API: one pass-through route per capability.
//!
//! # Responsibilities
//! - Accept any JSON body, forward it to the capability's upstream
//! - Relay the upstream JSON with 200, whatever its `success` flag says
//! - On any failure, log with the capability tag and answer the fixed 500 body
//!
//! # Design Decisions
//! - The body is taken as raw bytes so a non-JSON body reaches our own
//!   error path instead of axum's JSON rejection
//! - Single attempt, no retry

use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use crate::gateway::{Capability, UpstreamClient};
use crate::http::response::{relay_json, ApiFailure};
use crate::http::server::AppState;
use crate::observability::metrics;

/// POST /api/research
pub async fn research(State(state): State<AppState>, body: Bytes) -> Response {
    relay(&state.gateway, Capability::Research, body).await
}

/// POST /api/script
pub async fn script(State(state): State<AppState>, body: Bytes) -> Response {
    relay(&state.gateway, Capability::Script, body).await
}

/// POST /api/topics
pub async fn topics(State(state): State<AppState>, body: Bytes) -> Response {
    relay(&state.gateway, Capability::Topics, body).await
}

async fn relay(gateway: &UpstreamClient, capability: Capability, body: Bytes) -> Response {
    match gateway.relay(capability, body).await {
        Ok(payload) => {
            metrics::record_request(capability, "api", 200);
            relay_json(payload)
        }
        Err(e) => {
            tracing::error!(
                capability = %capability,
                error_kind = e.kind(),
                error = %e,
                "{}",
                capability.log_tag()
            );
            metrics::record_request(capability, "api", 500);
            ApiFailure::new(capability).into_response()
        }
    }
}
