//! Operational HTTP endpoints.
//!
//! - `/`        : service banner (message + version)
//! - `/health`  : liveness
//! - `/metrics` : Prometheus text format

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use agnos_core::health::HealthBody;

use crate::app_state::AppState;
use crate::config;

pub const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "Agnos API is running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthBody::ok(config::SERVICE, &state.cfg().environment))
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    match state.metrics().render() {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(service = config::SERVICE, error = %e, "metrics render failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
