//! HTTP surface for the clock pages.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use clock_weather_core::{WeatherError, WeatherService};
use tower_http::cors::{Any, CorsLayer};

const CITY_CODE_PARAM: &str = "cityCode";

/// Shared state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<WeatherService>,
}

pub fn router(service: Arc<WeatherService>) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);

    Router::new()
        .route("/api/weather", get(weather))
        .route("/healthz", get(health))
        .layer(cors)
        .with_state(AppState { service })
}

pub async fn serve(addr: &str, service: Arc<WeatherService>) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("Weather proxy listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(service))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received");
        })
        .await
        .context("HTTP server error")
}

/// `GET /api/weather?cityCode=...`. Repeated keys arrive as several pairs,
/// which the service rejects like a missing parameter.
async fn weather(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let codes: Vec<String> = match query {
        Ok(Query(pairs)) => pairs
            .into_iter()
            .filter(|(k, _)| k == CITY_CODE_PARAM)
            .map(|(_, v)| v)
            .collect(),
        Err(e) => {
            tracing::debug!("Rejected query string: {e}");
            return error_response(&WeatherError::InvalidInput);
        }
    };

    match state.service.weather(codes.as_slice()).await {
        Ok(resp) => (StatusCode::OK, Json(resp)).into_response(),
        Err(e) => error_response(&e),
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

fn error_response(err: &WeatherError) -> Response {
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(err.body())).into_response()
}
