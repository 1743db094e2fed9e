//! Response shapes produced by the gateway itself.
//!
//! # Responsibilities
//! - Fixed failure body for the API routes
//! - Relay upstream JSON bytes with the right content type
//!
//! # Design Decisions
//! - The failure body never carries upstream diagnostics; those go to logs
//! - Upstream logical failures (`success: false`) are relayed with 200

use axum::body::{Body, Bytes};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::gateway::Capability;

/// `{ "success": false, "message": ... }` with HTTP 500.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ApiFailure {
    pub success: bool,
    pub message: &'static str,
}

impl ApiFailure {
    pub fn new(capability: Capability) -> Self {
        Self {
            success: false,
            message: capability.failure_message(),
        }
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self)).into_response()
    }
}

/// HTTP 200 carrying the upstream's JSON body byte for byte.
pub fn relay_json(body: Bytes) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        Body::from(body),
    )
        .into_response()
}
