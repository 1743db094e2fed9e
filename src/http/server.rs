//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router: pages, JSON API, health, assets
//! - Wire up middleware (request ID, tracing, timeout, body limit, headers)
//! - Serve on a plain TCP listener or over TLS
//! - Apply reloaded upstream tables to the shared client
//! - Stop gracefully on the shutdown broadcast

use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_server::tls_rustls::RustlsConfig;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::schema::GatewayConfig;
use crate::config::UpstreamsConfig;
use crate::gateway::{Capability, ProxyError, UpstreamClient};
use crate::http::api;
use crate::http::request::{RequestSpan, X_REQUEST_ID};
use crate::lifecycle::shutdown;
use crate::pages::{assets, landing, research, script, topics};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub gateway: UpstreamClient,
}

/// HTTP server for the content gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
    gateway: UpstreamClient,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, ProxyError> {
        let gateway = UpstreamClient::new(config.upstreams.clone(), &config.timeouts)?;
        let state = AppState {
            gateway: gateway.clone(),
        };

        let router = build_router(&config, state);
        Ok(Self {
            router,
            config,
            gateway,
        })
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        upstream_updates: mpsc::UnboundedReceiver<UpstreamsConfig>,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        self.spawn_upstream_updates(upstream_updates);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Run the server over TLS on `addr`.
    pub async fn run_tls(
        self,
        addr: SocketAddr,
        tls: RustlsConfig,
        upstream_updates: mpsc::UnboundedReceiver<UpstreamsConfig>,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), io::Error> {
        tracing::info!(address = %addr, "HTTPS server starting");

        self.spawn_upstream_updates(upstream_updates);

        let handle = axum_server::Handle::new();
        let drain = Duration::from_secs(self.config.timeouts.request_secs);
        let signal = handle.clone();
        tokio::spawn(async move {
            shutdown::wait(shutdown).await;
            signal.graceful_shutdown(Some(drain));
        });

        axum_server::bind_rustls(addr, tls)
            .handle(handle)
            .serve(self.router.into_make_service())
            .await?;

        tracing::info!("HTTPS server stopped");
        Ok(())
    }

    fn spawn_upstream_updates(&self, mut updates: mpsc::UnboundedReceiver<UpstreamsConfig>) {
        let gateway = self.gateway.clone();
        tokio::spawn(async move {
            while let Some(upstreams) = updates.recv().await {
                gateway.update_upstreams(upstreams);
                tracing::info!("Upstream table reloaded");
            }
        });
    }
}

/// Build the Axum router with all middleware layers.
pub fn build_router(config: &GatewayConfig, state: AppState) -> Router {
    let request_id = HeaderName::from_static(X_REQUEST_ID);

    let router = Router::new()
        .route("/", get(landing::show))
        .route(research::PATH, get(research::show).post(research::submit))
        .route(script::PATH, get(script::show).post(script::submit))
        .route(topics::PATH, get(topics::show).post(topics::submit))
        .route(Capability::Research.api_path(), post(api::research))
        .route(Capability::Script.api_path(), post(api::script))
        .route(Capability::Topics.api_path(), post(api::topics))
        .route("/assets/app.js", get(assets::script))
        .route("/assets/app.css", get(assets::stylesheet))
        .route("/health", get(health))
        .with_state(state);

    let router = if config.limits.security_headers {
        router
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_FRAME_OPTIONS,
                HeaderValue::from_static("DENY"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::REFERRER_POLICY,
                HeaderValue::from_static("no-referrer"),
            ))
    } else {
        router
    };

    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
            .layer(TraceLayer::new_for_http().make_span_with(RequestSpan))
            .layer(PropagateRequestIdLayer::new(request_id))
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                Duration::from_secs(config.timeouts.request_secs),
            ))
            .layer(DefaultBodyLimit::disable()),
    )
}

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
