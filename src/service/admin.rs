// The admin service facade: the only interface the dashboard consumes.
//
// Every method sleeps its configured artificial latency first, then performs
// its read or mutation as a single synchronous step against the store, so no
// caller ever observes a half-applied mutation. Once invoked, a call's delay
// always resolves and its mutation always applies.

use crate::core::config::{FixtureConfig, LatencyConfig};
use crate::core::error::AdminError;
use crate::core::startup::generate_fixture_set;
use crate::models::stats::DashboardStats;
use crate::models::subscription::Subscription;
use crate::models::user::{SubscriptionTier, User, UserStatus};
use crate::stores::fixture_store::FixtureStore;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Conjunctive filters for the user listing.
#[derive(Debug, Default, Clone)]
pub struct UserFilters {
    pub status: Option<UserStatus>,
    pub subscription: Option<SubscriptionTier>,
    pub search: Option<String>,
}

pub struct AdminService {
    store: Arc<FixtureStore>,
    latency: LatencyConfig,
    fixtures: FixtureConfig,
}

impl AdminService {
    pub fn new(store: Arc<FixtureStore>, latency: LatencyConfig, fixtures: FixtureConfig) -> Self {
        Self {
            store,
            latency,
            fixtures,
        }
    }

    async fn simulate_latency(&self, ms: u64) {
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }

    /// List users, applying the filters conjunctively.
    ///
    /// Exact match on status and subscription, case-insensitive substring
    /// match of `search` against name or email. The relative order of the
    /// seeded list is preserved. Linear scan; the collection is fixed-size
    /// and small, so no index is kept.
    pub async fn get_users(&self, filters: &UserFilters) -> Vec<User> {
        self.simulate_latency(self.latency.list_users_ms).await;

        let mut users = self.store.users();

        if let Some(status) = filters.status {
            users.retain(|u| u.status == status);
        }

        if let Some(tier) = filters.subscription {
            users.retain(|u| u.subscription == tier);
        }

        if let Some(search) = &filters.search {
            let needle = search.to_lowercase();
            users.retain(|u| {
                u.name.to_lowercase().contains(&needle)
                    || u.email.to_lowercase().contains(&needle)
            });
        }

        debug!(matched = users.len(), "User listing served");

        users
    }

    /// Mutate a user's status in place and return the updated record.
    pub async fn update_user_status(
        &self,
        user_id: &str,
        status: UserStatus,
    ) -> Result<User, AdminError> {
        self.simulate_latency(self.latency.update_user_ms).await;

        self.store
            .update_status(user_id, status)
            .ok_or_else(|| AdminError::NotFound(format!("User not found: {user_id}")))
    }

    /// Remove a user. Removing the same id twice fails the second time.
    pub async fn delete_user(&self, user_id: &str) -> Result<(), AdminError> {
        self.simulate_latency(self.latency.delete_user_ms).await;

        self.store
            .remove_user(user_id)
            .map(|_| ())
            .ok_or_else(|| AdminError::NotFound(format!("User not found: {user_id}")))
    }

    /// The aggregate snapshot computed at seed time.
    ///
    /// Not recomputed on mutation: after an update or delete it reflects the
    /// original fixture set until the next `reload`.
    pub async fn get_dashboard_stats(&self) -> DashboardStats {
        self.simulate_latency(self.latency.stats_ms).await;
        self.store.stats()
    }

    pub async fn get_subscriptions(&self) -> Vec<Subscription> {
        self.simulate_latency(self.latency.subscriptions_ms).await;
        self.store.subscriptions()
    }

    /// Regenerate the whole fixture set and recompute the stats snapshot.
    /// Returns the new (user, subscription) counts.
    pub async fn reload(&self) -> (usize, usize) {
        let (users, subscriptions, stats) = generate_fixture_set(self.fixtures.user_count);
        let counts = (users.len(), subscriptions.len());
        self.store.replace(users, subscriptions, stats);
        counts
    }
}
