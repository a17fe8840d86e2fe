// Record generators: one syntactically valid, plausible entity per call.
//
// All draws are independent and unseeded; fixture sets are not reproducible
// across runs.

use crate::fixtures::pools;
use crate::fixtures::sampler::{choose, random_ip, sample_weighted, user_id};
use crate::models::stats::{DashboardStats, QueryPoint, RevenuePoint, SubscriptionBreakdown};
use crate::models::subscription::{Subscription, SubscriptionStatus};
use crate::models::user::{SubscriptionTier, User, UserStatus};
use chrono::{DateTime, Datelike, Duration, Utc};
use rand::Rng;

// 70% active, 25% inactive, 5% banned
const STATUS_WEIGHTS: [(UserStatus, f64); 3] = [
    (UserStatus::Active, 0.70),
    (UserStatus::Inactive, 0.25),
    (UserStatus::Banned, 0.05),
];

// 60% free, 30% pro, 10% enterprise
const TIER_WEIGHTS: [(SubscriptionTier, f64); 3] = [
    (SubscriptionTier::Free, 0.60),
    (SubscriptionTier::Pro, 0.30),
    (SubscriptionTier::Enterprise, 0.10),
];

/// How far back a user can have joined, in days.
const JOIN_WINDOW_DAYS: f64 = 730.0;

const PRO_AMOUNT: f64 = 29.99;
const ENTERPRISE_AMOUNT: f64 = 99.99;

fn back_offset<R: Rng>(rng: &mut R, window_days: f64) -> Duration {
    Duration::seconds((rng.random::<f64>() * window_days * 86_400.0) as i64)
}

/// Per-tier ceiling for the lifetime query counter.
fn query_ceiling(tier: SubscriptionTier) -> u32 {
    match tier {
        SubscriptionTier::Free => 500,
        SubscriptionTier::Pro => 2_000,
        SubscriptionTier::Enterprise => 5_000,
    }
}

/// Generate one synthetic user.
///
/// `last_active` is drawn from its own window (7 days for active users,
/// 30 otherwise) and may precede `joined_at`; the upstream data does not
/// order the two fields and neither do we.
pub fn generate_user<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> User {
    let first = *choose(rng, pools::FIRST_NAMES);
    let last = *choose(rng, pools::LAST_NAMES);
    let domain = *choose(rng, pools::EMAIL_DOMAINS);

    let first_lower = first.to_lowercase();
    let last_lower = last.to_lowercase();

    let email = match rng.random_range(0..5) {
        0 => format!("{first_lower}.{last_lower}@{domain}"),
        1 => format!("{first_lower}{last_lower}@{domain}"),
        2 => format!("{first_lower}{}@{domain}", rng.random_range(0..999)),
        3 => format!("{first_lower}_{last_lower}@{domain}"),
        _ => format!("{first_lower}{last_lower}{}@{domain}", rng.random_range(0..99)),
    };

    let status = sample_weighted(rng, &STATUS_WEIGHTS);
    let subscription = sample_weighted(rng, &TIER_WEIGHTS);

    let active_window_days = if status == UserStatus::Active { 7.0 } else { 30.0 };

    let total_queries = (rng.random::<f64>() * query_ceiling(subscription) as f64) as u32;

    User {
        id: user_id(rng),
        email,
        name: format!("{first} {last}"),
        avatar: Some(format!(
            "https://api.dicebear.com/7.x/avataaars/svg?seed={first}{last}"
        )),
        status,
        subscription,
        joined_at: now - back_offset(rng, JOIN_WINDOW_DAYS),
        last_active: now - back_offset(rng, active_window_days),
        total_queries,
        location: Some(choose(rng, pools::LOCATIONS).to_string()),
        company: if rng.random::<f64>() < 0.7 {
            Some(choose(rng, pools::COMPANIES).to_string())
        } else {
            None
        },
        ip_address: Some(random_ip(rng)),
        device_info: Some(choose(rng, pools::DEVICES).to_string()),
    }
}

/// Derive the billing record for a user. Free-tier users have none.
pub fn generate_subscription<R: Rng>(
    rng: &mut R,
    user: &User,
    now: DateTime<Utc>,
) -> Option<Subscription> {
    let (amount, term_days) = match user.subscription {
        SubscriptionTier::Free => return None,
        SubscriptionTier::Pro => (PRO_AMOUNT, 30),
        SubscriptionTier::Enterprise => (ENTERPRISE_AMOUNT, 365),
    };

    // 90% active, 10% cancelled
    let status = if rng.random::<f64>() < 0.9 {
        SubscriptionStatus::Active
    } else {
        SubscriptionStatus::Cancelled
    };

    Some(Subscription {
        id: format!("sub-{}", user.id),
        user_id: user.id.clone(),
        plan: user.subscription,
        status,
        start_date: user.joined_at,
        end_date: Some(now + Duration::days(term_days)),
        amount,
        currency: "USD".to_string(),
    })
}

/// Aggregate the seeded collections into the dashboard snapshot.
pub fn generate_stats<R: Rng>(
    rng: &mut R,
    users: &[User],
    subscriptions: &[Subscription],
    now: DateTime<Utc>,
) -> DashboardStats {
    let count_tier = |tier: SubscriptionTier| users.iter().filter(|u| u.subscription == tier).count();

    let queries_performance = (0..30)
        .map(|i| QueryPoint {
            date: (now - Duration::days(29 - i)).format("%Y-%m-%d").to_string(),
            queries: rng.random_range(500..1500),
        })
        .collect();

    let revenue_performance = (1..=12)
        .map(|month| RevenuePoint {
            date: format!("{:04}-{:02}-01", now.year(), month),
            revenue: rng.random_range(5_000..15_000),
        })
        .collect();

    DashboardStats {
        total_users: users.len(),
        active_users: users.iter().filter(|u| u.status == UserStatus::Active).count(),
        total_revenue: subscriptions.iter().map(|s| s.amount).sum(),
        total_queries: users.iter().map(|u| u.total_queries as u64).sum(),
        new_users_today: rng.random_range(0..20),
        queries_performance,
        revenue_performance,
        subscription_breakdown: SubscriptionBreakdown {
            free: count_tier(SubscriptionTier::Free),
            pro: count_tier(SubscriptionTier::Pro),
            enterprise: count_tier(SubscriptionTier::Enterprise),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_user_field_shape() {
        let mut rng = rand::rng();
        let now = Utc::now();

        for _ in 0..50 {
            let user = generate_user(&mut rng, now);

            assert!(user.id.starts_with("usr_"));
            assert!(user.email.contains('@'));
            assert_eq!(user.name.split_whitespace().count(), 2);
            assert!(user.avatar.is_some());
            assert!(user.location.is_some());
            assert!(user.ip_address.is_some());
            assert!(user.device_info.is_some());
        }
    }

    #[test]
    fn test_generated_user_time_windows() {
        let mut rng = rand::rng();
        let now = Utc::now();

        for _ in 0..50 {
            let user = generate_user(&mut rng, now);

            assert!(user.joined_at <= now);
            assert!(user.joined_at >= now - Duration::days(731));
            assert!(user.last_active <= now);
            assert!(user.last_active >= now - Duration::days(31));
            if user.status == UserStatus::Active {
                assert!(user.last_active >= now - Duration::days(8));
            }
        }
    }

    #[test]
    fn test_query_counter_respects_tier_ceiling() {
        let mut rng = rand::rng();
        let now = Utc::now();

        for _ in 0..100 {
            let user = generate_user(&mut rng, now);
            assert!(user.total_queries < query_ceiling(user.subscription));
        }
    }

    #[test]
    fn test_free_user_has_no_subscription() {
        let mut rng = rand::rng();
        let now = Utc::now();

        let mut user = generate_user(&mut rng, now);
        user.subscription = SubscriptionTier::Free;

        assert!(generate_subscription(&mut rng, &user, now).is_none());
    }

    #[test]
    fn test_pro_subscription_fields() {
        let mut rng = rand::rng();
        let now = Utc::now();

        let mut user = generate_user(&mut rng, now);
        user.subscription = SubscriptionTier::Pro;

        let sub = generate_subscription(&mut rng, &user, now).unwrap();
        assert_eq!(sub.id, format!("sub-{}", user.id));
        assert_eq!(sub.user_id, user.id);
        assert_eq!(sub.plan, SubscriptionTier::Pro);
        assert_eq!(sub.amount, 29.99);
        assert_eq!(sub.currency, "USD");
        assert_eq!(sub.start_date, user.joined_at);
        assert_eq!(sub.end_date, Some(now + Duration::days(30)));
    }

    #[test]
    fn test_enterprise_subscription_fields() {
        let mut rng = rand::rng();
        let now = Utc::now();

        let mut user = generate_user(&mut rng, now);
        user.subscription = SubscriptionTier::Enterprise;

        let sub = generate_subscription(&mut rng, &user, now).unwrap();
        assert_eq!(sub.amount, 99.99);
        assert_eq!(sub.end_date, Some(now + Duration::days(365)));
    }

    #[test]
    fn test_stats_totals_match_inputs() {
        let mut rng = rand::rng();
        let now = Utc::now();

        let users: Vec<User> = (0..40).map(|_| generate_user(&mut rng, now)).collect();
        let subscriptions: Vec<Subscription> = users
            .iter()
            .filter_map(|u| generate_subscription(&mut rng, u, now))
            .collect();

        let stats = generate_stats(&mut rng, &users, &subscriptions, now);

        assert_eq!(stats.total_users, 40);
        assert_eq!(
            stats.active_users,
            users.iter().filter(|u| u.status == UserStatus::Active).count()
        );
        assert_eq!(
            stats.total_queries,
            users.iter().map(|u| u.total_queries as u64).sum::<u64>()
        );
        let expected_revenue: f64 = subscriptions.iter().map(|s| s.amount).sum();
        assert!((stats.total_revenue - expected_revenue).abs() < 1e-9);
    }

    #[test]
    fn test_stats_breakdown_sums_to_total() {
        let mut rng = rand::rng();
        let now = Utc::now();

        let users: Vec<User> = (0..60).map(|_| generate_user(&mut rng, now)).collect();
        let stats = generate_stats(&mut rng, &users, &[], now);

        let b = &stats.subscription_breakdown;
        assert_eq!(b.free + b.pro + b.enterprise, stats.total_users);
    }

    #[test]
    fn test_stats_series_shapes() {
        let mut rng = rand::rng();
        let now = Utc::now();

        let stats = generate_stats(&mut rng, &[], &[], now);

        assert_eq!(stats.queries_performance.len(), 30);
        assert_eq!(stats.revenue_performance.len(), 12);
        assert!(stats.new_users_today < 20);

        for point in &stats.queries_performance {
            assert!(point.queries >= 500 && point.queries < 1500);
        }
        // oldest first, ending today
        let last = stats.queries_performance.last().unwrap();
        assert_eq!(last.date, now.format("%Y-%m-%d").to_string());

        for (i, point) in stats.revenue_performance.iter().enumerate() {
            assert!(point.revenue >= 5_000 && point.revenue < 15_000);
            assert_eq!(
                point.date,
                format!("{:04}-{:02}-01", now.year(), i + 1)
            );
        }
    }
}
