//! Request correlation.
//!
//! # Responsibilities
//! - Name the request ID header
//! - Build the per-request tracing span carrying that ID
//!
//! # Design Decisions
//! - The ID is assigned by `SetRequestIdLayer` before tracing sees the request
//! - Inbound IDs are trusted and echoed back unchanged

use axum::http::Request;
use tower_http::trace::MakeSpan;
use tracing::Span;

/// Header carrying the correlation ID in both directions.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Read the request ID, if one has been assigned.
pub fn request_id<B>(request: &Request<B>) -> Option<&str> {
    request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
}

/// Span factory for `TraceLayer` that records method, path and request ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "request",
            method = %request.method(),
            path = %request.uri().path(),
            request_id = %request_id(request).unwrap_or("unknown"),
        )
    }
}
