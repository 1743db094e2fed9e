//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, tracing span)
//!     → api.rs    POST /api/{research,script,topics} → gateway relay
//!       pages     GET/POST form pages                → gateway fetch
//!     → response.rs (relay bytes or fixed failure body)
//!     → Send to client
//! ```

pub mod api;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use response::ApiFailure;
pub use server::{build_router, AppState, HttpServer};
