//! Axum REST API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::error;

use crate::db;
use crate::errors::Result;
use crate::events::EventRecord;

#[derive(Clone)]
pub struct ApiState {
    pub pool: SqlitePool,
}

/// Build the API router over `state`.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/events", get(get_all_events))
        .route("/releases/:id/events", get(get_release_events))
        .route("/projects/:id/events", get(get_project_events))
        .with_state(state)
}

// ─────────────────────────────────────────────────────────
// Response shapes
// ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ReleaseEventsResponse {
    pub release_id: String,
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct ProjectEventsResponse {
    pub project_id: String,
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct AllEventsResponse {
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Render a query result as `200` with `body`, or `500` with the error.
fn respond<T, F>(result: Result<Vec<EventRecord>>, body: F) -> Response
where
    T: Serialize,
    F: FnOnce(Vec<EventRecord>) -> T,
{
    match result {
        Ok(events) => (StatusCode::OK, Json(body(events))).into_response(),
        Err(e) => {
            error!(error = %e, "Event query failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

// ─────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /releases/:id/events`
///
/// Returns the indexed lifecycle of one release, oldest first.
pub async fn get_release_events(
    State(state): State<Arc<ApiState>>,
    Path(release_id): Path<String>,
) -> Response {
    let result = db::get_events_for_release(&state.pool, &release_id).await;
    respond(result, |events| ReleaseEventsResponse {
        release_id,
        count: events.len(),
        events,
    })
}

/// `GET /projects/:id/events`
///
/// Returns the events of every release opened for the project.
pub async fn get_project_events(
    State(state): State<Arc<ApiState>>,
    Path(project_id): Path<String>,
) -> Response {
    let result = db::get_events_for_project(&state.pool, &project_id).await;
    respond(result, |events| ProjectEventsResponse {
        project_id,
        count: events.len(),
        events,
    })
}

/// `GET /events`
///
/// Returns all indexed events, including registry-wide ones.
pub async fn get_all_events(State(state): State<Arc<ApiState>>) -> Response {
    let result = db::get_all_events(&state.pool).await;
    respond(result, |events| AllEventsResponse {
        count: events.len(),
        events,
    })
}
