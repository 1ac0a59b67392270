//! HTTP routes for statusd.
//!
//! The webhook is a single POST on the root path, plus a health endpoint
//! for deployment checks.

use crate::router::{self, RouteOutcome};
use crate::server::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use status_common::SkillRequest;
use std::sync::Arc;
use tracing::error;

type AppStateArc = Arc<AppState>;

pub fn skill_routes() -> Router<AppStateArc> {
    Router::new().route("/", post(handle_event))
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/health", get(health_check))
}

/// Webhook entry point: one inbound platform event per call.
async fn handle_event(
    State(state): State<AppStateArc>,
    Json(event): Json<SkillRequest>,
) -> Result<Response, (StatusCode, String)> {
    match router::dispatch(&event, &state).await {
        Ok(RouteOutcome::Respond(envelope)) => Ok(Json(envelope).into_response()),
        Ok(RouteOutcome::NoResponse) => Ok(StatusCode::OK.into_response()),
        Err(e) => {
            error!("Rejecting event {}: {}", event.request.request_id(), e);
            let status = StatusCode::from_u16(e.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Err((status, e.to_string()))
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
