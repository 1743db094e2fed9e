//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming TCP connection
//!     → tls.rs (optional TLS handshake via axum-server/rustls)
//!     → Hand off to HTTP layer
//! ```
//!
//! Plain listeners are bound with tokio directly in `main`.

pub mod tls;

pub use tls::load_tls_config;
