use crate::models::user::{SubscriptionTier, UserStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct UserListQuery {
    pub status: Option<UserStatus>,
    pub subscription: Option<SubscriptionTier>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UserStatusQuery {
    pub user_id: String,
    pub status: UserStatus,
}

#[derive(Debug, Deserialize)]
pub struct UserRemoveQuery {
    pub user_id: String,
}

#[derive(Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}
