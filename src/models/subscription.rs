use crate::models::user::SubscriptionTier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Cancelled,
    Expired,
    Pending,
}

/// A billing record, derived 1:1 from every non-free user at seed time.
///
/// `plan` is copied from the owning user's tier when the record is built and
/// is never re-synced if the user's tier changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// `sub-<userId>`, deterministic from the owner
    pub id: String,
    pub user_id: String,
    pub plan: SubscriptionTier,
    pub status: SubscriptionStatus,
    pub start_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    pub amount: f64,
    pub currency: String,
}
