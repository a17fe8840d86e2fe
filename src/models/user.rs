use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account standing of a platform user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Banned,
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Banned => "banned",
        };
        f.write_str(s)
    }
}

/// Billing tier controlling usage ceilings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    Free,
    Pro,
    Enterprise,
}

impl fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SubscriptionTier::Free => "free",
            SubscriptionTier::Pro => "pro",
            SubscriptionTier::Enterprise => "enterprise",
        };
        f.write_str(s)
    }
}

/// A platform user: identity, profile and a usage snapshot.
///
/// Serialized in camelCase so the dashboard frontend consumes records
/// unchanged. The `subscription` tier is stored redundantly here in addition
/// to the Subscription record, matching the upstream data shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque unique id, `usr_` prefixed
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub status: UserStatus,
    pub subscription: SubscriptionTier,
    pub joined_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
    pub total_queries: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_info: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&UserStatus::Banned).unwrap(), "\"banned\"");
        assert_eq!(serde_json::to_string(&SubscriptionTier::Enterprise).unwrap(), "\"enterprise\"");
    }

    #[test]
    fn test_status_display_matches_wire_form() {
        assert_eq!(UserStatus::Inactive.to_string(), "inactive");
        assert_eq!(SubscriptionTier::Pro.to_string(), "pro");
    }
}
