// Subscription listing endpoint

use crate::core::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

/// Returns the billing records derived at seed time, one per non-free user.
///
/// GET /subscriptions
pub async fn subscriptions_handler(State(state): State<Arc<AppState>>) -> Response {
    let subscriptions = state.service.get_subscriptions().await;

    (StatusCode::OK, Json(subscriptions)).into_response()
}
