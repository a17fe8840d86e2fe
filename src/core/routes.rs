// HTTP routes configuration

use crate::core::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Public endpoints
        .route("/health", get(crate::handlers::health::health_handler))

        // User management
        .route("/users", get(crate::handlers::users::user_list_handler))
        .route("/user/status", get(crate::handlers::users::user_status_handler))
        .route("/user/remove", get(crate::handlers::users::user_remove_handler))

        // Dashboard data
        .route("/stats", get(crate::handlers::stats::stats_handler))
        .route(
            "/subscriptions",
            get(crate::handlers::subscriptions::subscriptions_handler),
        )

        // Fixture administration
        .route("/reload", post(crate::handlers::admin::reload_handler))

        // 404 fallback for all unmatched routes
        .fallback(crate::handlers::fallback::fallback_handler)

        .with_state(state)
}
