//! Liveness and health endpoints, outside the `/api` surface.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};
use tracing::info;

use crate::infra::app_state::AppState;

pub async fn ping_handler() -> Result<Json<Value>, StatusCode> {
    info!("Ping endpoint called");
    Ok(Json(json!({
        "status": "ok",
        "message": "Folio catalog service is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}

pub async fn health_handler(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let mut health_status = json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "checks": {}
    });

    // Store connectivity check. The author listing doubles as the probe.
    match state.catalog().list_authors().await {
        Ok(authors) => {
            health_status["checks"]["store"] = json!({
                "status": "healthy",
                "authors": authors.len()
            });
        }
        Err(e) => {
            health_status["checks"]["store"] = json!({
                "status": "unhealthy",
                "error": e.to_string()
            });
            return Err(StatusCode::SERVICE_UNAVAILABLE);
        }
    }

    Ok(Json(health_status))
}
