//! Upstream gateway subsystem.
//!
//! # Data Flow
//! ```text
//! /api/<capability> handler  ─┐
//!                             ├─→ client.rs (UpstreamClient::forward)
//! page submit handler ────────┘        → POST upstream URL from config
//!                                      → JSON body (any status)
//!                                      → ProxyError on transport/parse failure
//! page submit handler
//!     → envelope.rs (unwrap { success, data, message })
//!     → typed result or FetchFailure
//! ```
//!
//! # Design Decisions
//! - Upstream URLs are held only by the client; pages never see them
//! - One attempt per inbound request
//! - Error kinds stay distinct internally and collapse to fixed text outward

pub mod capability;
pub mod client;
pub mod envelope;
pub mod error;

pub use capability::{Capability, GENERIC_FAILURE};
pub use client::{Gateway, UpstreamClient};
pub use envelope::{fetch, FetchFailure, UpstreamEnvelope};
pub use error::ProxyError;
