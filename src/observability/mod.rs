//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Request IDs are attached by the HTTP layer (x-request-id) and show up in
//! the TraceLayer spans.
//! ```

pub mod logging;
pub mod metrics;
