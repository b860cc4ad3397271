use crate::error::RelayError;
use crate::signaling::{RelayService, ws_handler};
use axum::extract::State;
use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Payload of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub rooms: usize,
    pub connections: usize,
}

async fn health_handler(State(service): State<RelayService>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: service.uptime_seconds(),
        rooms: service.registry().room_count(),
        connections: service.registry().connection_count(),
    })
}

/// Builds the relay's HTTP surface: the meeting WebSocket endpoint, a
/// health probe, request tracing and CORS.
pub fn relay_router(service: RelayService) -> Result<Router, RelayError> {
    let origin = match service.config().allowed_origin.as_deref() {
        Some(raw) => AllowOrigin::exact(
            raw.parse::<HeaderValue>()
                .map_err(|_| RelayError::InvalidOrigin(raw.to_owned()))?,
        ),
        None => AllowOrigin::any(),
    };
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(Router::new()
        .route("/ws/meeting/{room_id}", get(ws_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(service))
}
