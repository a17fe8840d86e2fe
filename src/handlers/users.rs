use crate::core::error::AdminError;
use crate::core::state::AppState;
use crate::models::admin::{SuccessResponse, UserListQuery, UserRemoveQuery, UserStatusQuery};
use crate::service::admin::UserFilters;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

/// List users with optional conjunctive filters
///
/// GET /users?status=<status>&subscription=<tier>&search=<text>
pub async fn user_list_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UserListQuery>,
) -> Response {
    let filters = UserFilters {
        status: params.status,
        subscription: params.subscription,
        search: params.search,
    };

    let users = state.service.get_users(&filters).await;

    (StatusCode::OK, Json(users)).into_response()
}

/// Update a user's account status
///
/// GET /user/status?user_id=<id>&status=<active|inactive|banned>
pub async fn user_status_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UserStatusQuery>,
) -> Result<Response, AdminError> {
    if params.user_id.is_empty() {
        warn!("Status update with empty user_id");
        return Err(AdminError::InvalidParameter(
            "user_id must not be empty".to_string(),
        ));
    }

    let user = state
        .service
        .update_user_status(&params.user_id, params.status)
        .await?;

    info!(
        user_id = %user.id,
        status = %user.status,
        "User status updated"
    );

    Ok((StatusCode::OK, Json(user)).into_response())
}

/// Remove a user from the fixture set
///
/// GET /user/remove?user_id=<id>
pub async fn user_remove_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UserRemoveQuery>,
) -> Result<Response, AdminError> {
    if params.user_id.is_empty() {
        warn!("Removal with empty user_id");
        return Err(AdminError::InvalidParameter(
            "user_id must not be empty".to_string(),
        ));
    }

    state.service.delete_user(&params.user_id).await?;

    info!(user_id = %params.user_id, "User removed");

    Ok((
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            message: "User removed successfully".to_string(),
        }),
    )
        .into_response())
}
