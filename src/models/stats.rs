use serde::{Deserialize, Serialize};

/// One point of the daily query-volume series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryPoint {
    /// `YYYY-MM-DD`
    pub date: String,
    pub queries: u32,
}

/// One point of the monthly revenue series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenuePoint {
    /// `YYYY-MM-DD`, first day of the month
    pub date: String,
    pub revenue: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionBreakdown {
    pub free: usize,
    pub pro: usize,
    pub enterprise: usize,
}

/// Aggregate dashboard snapshot, computed once over the seeded fixture set.
///
/// Deliberately frozen: user mutations do not recompute it. Only a full
/// reseed (`/reload`) produces a fresh snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: usize,
    pub active_users: usize,
    pub total_revenue: f64,
    pub total_queries: u64,
    pub new_users_today: u32,
    /// 30 points, oldest first
    pub queries_performance: Vec<QueryPoint>,
    /// 12 points, one per month of the current year
    pub revenue_performance: Vec<RevenuePoint>,
    pub subscription_breakdown: SubscriptionBreakdown,
}
