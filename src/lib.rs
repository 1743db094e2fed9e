//! content-agent: web gateway for the research, script and topics services.
//!
//! # Architecture Overview
//!
//! ```text
//!   Browser                          content-agent                              Upstreams
//!   ───────                          ─────────────                              ─────────
//!   GET/POST /research  ──┐
//!   GET/POST /script-…  ──┼──▶ pages ──▶ gateway::fetch ──┐
//!   GET/POST /topics    ──┘                               │
//!                                                         ├──▶ UpstreamClient ──▶ research API
//!   POST /api/research  ──┐                               │                  ──▶ script API
//!   POST /api/script    ──┼──▶ http::api ──▶ relay ───────┘                  ──▶ topics API
//!   POST /api/topics    ──┘
//!
//!   Cross-cutting: config (TOML + hot-reloaded upstreams), observability
//!   (tracing + Prometheus), lifecycle (signals, graceful shutdown)
//! ```

// Core subsystems
pub mod config;
pub mod gateway;
pub mod http;
pub mod net;

// Presentation
pub mod models;
pub mod pages;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::schema::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
