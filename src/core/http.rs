//! Status server using Axum: health, Prometheus metrics and engine status

use axum::{
    extract::{MatchedPath, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};

use crate::core::runtime::{EngineStatus, SharedStatus};
use crate::metrics::Metrics;

const UNMATCHED_ROUTE: &str = "unmatched";

#[derive(Clone)]
pub struct AppState {
    pub status: SharedStatus,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
}

impl AppState {
    pub fn new(status: SharedStatus, metrics: Arc<Metrics>) -> Self {
        Self {
            status,
            metrics,
            start_time: Arc::new(Instant::now()),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let status = state.status.read().await;
    Json(json!({
        "status": "healthy",
        "uptime_seconds": state.start_time.elapsed().as_secs(),
        "cycle_count": status.cycle_count,
        "service": "tradeloom"
    }))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

pub async fn status_handler(State(state): State<AppState>) -> Json<EngineStatus> {
    Json(state.status.read().await.clone())
}

/// Count requests per route and status. Unrouted paths share one label so
/// scanners cannot grow the series count.
async fn count_requests(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_owned());
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();

    state
        .metrics
        .http_requests_total
        .with_label_values(&[route.as_str(), status.as_str()])
        .inc();

    if status.is_server_error() {
        tracing::error!(
            route = %route,
            status = %status,
            duration_ms = started.elapsed().as_millis() as u64,
            "Status server request failed"
        );
    }

    response
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/status", get(status_handler))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    count_requests,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(port: u16, state: AppState) -> Result<(), std::io::Error> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    axum::serve(listener, app).await
}
