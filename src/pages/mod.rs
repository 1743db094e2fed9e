//! Server-rendered pages.
//!
//! # Data Flow
//! ```text
//! GET  /<page>  → empty form
//! POST /<page>  → <Page>::submit (form state machine)
//!               → gateway::fetch (same upstream client the /api routes use)
//!               → <Page>Template (askama) → HTML
//! ```
//!
//! # Design Decisions
//! - Page state mirrors the form: inputs, loading flag, result, error text
//! - Pages never see upstream URLs; they only name a capability
//! - Copy payloads are computed server-side and carried in `data-copy`

pub mod assets;
pub mod copy;
pub mod landing;
pub mod nav;
pub mod research;
pub mod script;
pub mod topics;

#[cfg(test)]
pub(crate) mod testing;

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

pub use research::ResearchPage;
pub use script::ScriptPage;
pub use topics::TopicsPage;

/// Render a template into an HTML response.
pub(crate) fn render<T: Template>(template: &T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Template render failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Template render failed").into_response()
        }
    }
}
