// Dashboard stats endpoint

use crate::core::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

/// Returns the aggregate dashboard snapshot: user and revenue totals, the
/// daily query and monthly revenue series, and the per-tier breakdown.
///
/// The snapshot is frozen at seed time; user mutations do not refresh it.
///
/// GET /stats
pub async fn stats_handler(State(state): State<Arc<AppState>>) -> Response {
    let stats = state.service.get_dashboard_stats().await;

    (StatusCode::OK, Json(stats)).into_response()
}
