//! # HTTP server
//!
//! Renders pages on every request from the configuration snapshot.
//!
//! ## Endpoints
//!
//! - `GET /`, `/contact`, `/privacy`, `/terms`, `/sitemap` - HTML pages
//!   (trailing slash and `.html` forms accepted)
//! - `GET /sitemap.xml` - XML sitemap
//! - `GET /status` - site status JSON
//! - `GET /health` - liveness check
//!
//! The home page answers `503 Service Unavailable` with a `Retry-After`
//! header while maintenance mode is on. Unknown paths get the 404 page.

use axum::{
    Json, Router,
    extract::State,
    http::{Method, StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use greenway_site::{
    Route, SiteConfigStore, StatusReport, decide, render_not_found, render_route, sitemap_xml,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

/// Seconds clients are asked to wait while the home page is in maintenance.
pub const RETRY_AFTER_SECS: &str = "3600";

/// Shared server state. Cloned per request; the store hands out `Arc` snapshots.
#[derive(Clone)]
pub struct AppState {
    pub store: SiteConfigStore,
}

impl AppState {
    pub fn new(store: SiteConfigStore) -> Self {
        Self { store }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/status", get(status_handler))
        .route("/sitemap.xml", get(sitemap_xml_handler))
        .fallback(page_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn run_server(addr: &str, store: SiteConfigStore) -> anyhow::Result<()> {
    use anyhow::Context;

    let config = store.get();
    let router = create_router(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(
        addr = %addr,
        decision = ?decide(&config),
        "greenway site listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn status_handler(State(state): State<AppState>) -> Json<StatusReport> {
    Json(StatusReport::from_config(&state.store.get()))
}

pub async fn sitemap_xml_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        sitemap_xml(&state.store.get()),
    )
}

/// Every non-API path: resolve the route, render, map the gate decision to a status.
pub async fn page_handler(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "GET, HEAD")]).into_response();
    }

    let config = state.store.get();
    let Some(route) = Route::from_path(uri.path()) else {
        tracing::debug!(path = uri.path(), "no such page");
        return (StatusCode::NOT_FOUND, Html(render_not_found(&config))).into_response();
    };

    let page = render_route(route, &config);
    if route.is_gated() && page.decision.is_maintenance() {
        tracing::debug!(?route, "serving maintenance placeholder");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::RETRY_AFTER, RETRY_AFTER_SECS)],
            Html(page.html),
        )
            .into_response()
    } else {
        Html(page.html).into_response()
    }
}
