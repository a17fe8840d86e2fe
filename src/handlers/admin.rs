use crate::core::state::AppState;
use crate::models::admin::SuccessResponse;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::info;

/// Regenerate the whole fixture set and recompute the stats snapshot
///
/// POST /reload
pub async fn reload_handler(State(state): State<Arc<AppState>>) -> Response {
    info!("Starting fixture reload");

    let (users, subscriptions) = state.service.reload().await;

    info!(
        users = users,
        subscriptions = subscriptions,
        "Fixture reload completed successfully"
    );

    (
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            message: format!(
                "Reload successful: {} users, {} subscriptions",
                users, subscriptions
            ),
        }),
    )
        .into_response()
}
