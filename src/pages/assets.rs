//! Static assets compiled into the binary.

use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};

const APP_JS: &str = include_str!("../../assets/app.js");
const APP_CSS: &str = include_str!("../../assets/app.css");

fn asset(body: &'static str, content_type: &'static str) -> Response {
    (
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(content_type)),
            (header::CACHE_CONTROL, HeaderValue::from_static("public, max-age=3600")),
        ],
        body,
    )
        .into_response()
}

/// GET /assets/app.js
pub async fn script() -> Response {
    asset(APP_JS, "text/javascript; charset=utf-8")
}

/// GET /assets/app.css
pub async fn stylesheet() -> Response {
    asset(APP_CSS, "text/css; charset=utf-8")
}
