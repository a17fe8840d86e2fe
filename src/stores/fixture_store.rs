use crate::models::stats::DashboardStats;
use crate::models::subscription::Subscription;
use crate::models::user::{User, UserStatus};
use std::sync::RwLock;

/// Process-wide fixture collections, built once at startup.
///
/// The user list is the only mutable collection; subscriptions and the
/// stats snapshot are frozen at seed time and go stale as users are mutated.
/// `replace` swaps in a freshly generated set, which is the only way the
/// derived collections are ever recomputed.
pub struct FixtureStore {
    users: RwLock<Vec<User>>,
    subscriptions: RwLock<Vec<Subscription>>,
    stats: RwLock<DashboardStats>,
}

impl FixtureStore {
    pub fn new(users: Vec<User>, subscriptions: Vec<Subscription>, stats: DashboardStats) -> Self {
        Self {
            users: RwLock::new(users),
            subscriptions: RwLock::new(subscriptions),
            stats: RwLock::new(stats),
        }
    }

    /// Clone of the user list, insertion order preserved
    pub fn users(&self) -> Vec<User> {
        self.users.read().expect("user list lock poisoned").clone()
    }

    /// Mutate a user's status in place
    /// Returns the updated user, or None if the id is unknown
    pub fn update_status(&self, user_id: &str, status: UserStatus) -> Option<User> {
        let mut users = self.users.write().expect("user list lock poisoned");
        let user = users.iter_mut().find(|u| u.id == user_id)?;
        user.status = status;
        Some(user.clone())
    }

    /// Remove a user by id, keeping the relative order of the rest
    /// Returns the removed user if it existed
    pub fn remove_user(&self, user_id: &str) -> Option<User> {
        let mut users = self.users.write().expect("user list lock poisoned");
        let index = users.iter().position(|u| u.id == user_id)?;
        Some(users.remove(index))
    }

    /// Clone of the frozen subscription list
    pub fn subscriptions(&self) -> Vec<Subscription> {
        self.subscriptions
            .read()
            .expect("subscription list lock poisoned")
            .clone()
    }

    /// The frozen aggregate snapshot
    pub fn stats(&self) -> DashboardStats {
        self.stats.read().expect("stats lock poisoned").clone()
    }

    pub fn user_count(&self) -> usize {
        self.users.read().expect("user list lock poisoned").len()
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions
            .read()
            .expect("subscription list lock poisoned")
            .len()
    }

    /// Swap in a freshly generated fixture set
    pub fn replace(
        &self,
        users: Vec<User>,
        subscriptions: Vec<Subscription>,
        stats: DashboardStats,
    ) {
        *self.users.write().expect("user list lock poisoned") = users;
        *self
            .subscriptions
            .write()
            .expect("subscription list lock poisoned") = subscriptions;
        *self.stats.write().expect("stats lock poisoned") = stats;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::stats::SubscriptionBreakdown;
    use crate::models::user::SubscriptionTier;
    use chrono::Utc;

    fn make_user(id: &str, name: &str) -> User {
        let now = Utc::now();
        User {
            id: id.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            name: name.to_string(),
            avatar: None,
            status: UserStatus::Active,
            subscription: SubscriptionTier::Free,
            joined_at: now,
            last_active: now,
            total_queries: 0,
            location: None,
            company: None,
            ip_address: None,
            device_info: None,
        }
    }

    fn empty_stats() -> DashboardStats {
        DashboardStats {
            total_users: 0,
            active_users: 0,
            total_revenue: 0.0,
            total_queries: 0,
            new_users_today: 0,
            queries_performance: vec![],
            revenue_performance: vec![],
            subscription_breakdown: SubscriptionBreakdown {
                free: 0,
                pro: 0,
                enterprise: 0,
            },
        }
    }

    fn make_store() -> FixtureStore {
        let users = vec![
            make_user("usr_00000000a", "Alice"),
            make_user("usr_00000000b", "Bob"),
            make_user("usr_00000000c", "Carol"),
        ];
        FixtureStore::new(users, vec![], empty_stats())
    }

    #[test]
    fn test_users_returns_clone_in_order() {
        let store = make_store();
        let users = store.users();
        let ids: Vec<&str> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["usr_00000000a", "usr_00000000b", "usr_00000000c"]);
    }

    #[test]
    fn test_update_status_mutates_in_place() {
        let store = make_store();

        let updated = store.update_status("usr_00000000b", UserStatus::Banned).unwrap();
        assert_eq!(updated.status, UserStatus::Banned);

        let users = store.users();
        assert_eq!(users[1].status, UserStatus::Banned);
        assert_eq!(users[0].status, UserStatus::Active);
    }

    #[test]
    fn test_update_status_unknown_id() {
        let store = make_store();
        assert!(store.update_status("usr_missing00", UserStatus::Banned).is_none());
    }

    #[test]
    fn test_remove_user_keeps_order() {
        let store = make_store();

        assert!(store.remove_user("usr_00000000b").is_some());

        let ids: Vec<String> = store.users().into_iter().map(|u| u.id).collect();
        assert_eq!(ids, vec!["usr_00000000a", "usr_00000000c"]);
    }

    #[test]
    fn test_remove_user_twice_fails_second_time() {
        let store = make_store();
        assert!(store.remove_user("usr_00000000a").is_some());
        assert!(store.remove_user("usr_00000000a").is_none());
    }

    #[test]
    fn test_replace_swaps_all_collections() {
        let store = make_store();
        store.replace(vec![make_user("usr_00000000z", "Zed")], vec![], empty_stats());

        assert_eq!(store.user_count(), 1);
        assert_eq!(store.subscription_count(), 0);
        assert_eq!(store.users()[0].id, "usr_00000000z");
    }
}
