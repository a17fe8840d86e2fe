// Boot-time fixture seeding.

use crate::fixtures::generator::{generate_stats, generate_subscription, generate_user};
use crate::models::stats::DashboardStats;
use crate::models::subscription::Subscription;
use crate::models::user::User;
use crate::stores::fixture_store::FixtureStore;
use chrono::Utc;
use std::collections::HashSet;
use tracing::info;

/// Generate a complete fixture set: users with unique ids, one subscription
/// per non-free user, and the aggregate stats snapshot over both.
pub fn generate_fixture_set(user_count: usize) -> (Vec<User>, Vec<Subscription>, DashboardStats) {
    let mut rng = rand::rng();
    let now = Utc::now();

    let mut users = Vec::with_capacity(user_count);
    let mut seen_ids = HashSet::with_capacity(user_count);

    // Ids are 9 random base-36 chars, so collisions are rare; retry on the
    // off chance one happens to keep ids pairwise distinct.
    while users.len() < user_count {
        let user = generate_user(&mut rng, now);
        if seen_ids.insert(user.id.clone()) {
            users.push(user);
        }
    }

    let subscriptions: Vec<Subscription> = users
        .iter()
        .filter_map(|user| generate_subscription(&mut rng, user, now))
        .collect();

    let stats = generate_stats(&mut rng, &users, &subscriptions, now);

    (users, subscriptions, stats)
}

/// Build the process-wide fixture store.
pub fn seed_store(user_count: usize) -> FixtureStore {
    let (users, subscriptions, stats) = generate_fixture_set(user_count);

    info!(
        users = users.len(),
        subscriptions = subscriptions.len(),
        active_users = stats.active_users,
        total_revenue = stats.total_revenue,
        "Fixture store seeded"
    );

    FixtureStore::new(users, subscriptions, stats)
}
