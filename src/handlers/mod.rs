pub mod admin;
pub mod fallback;
pub mod health;
pub mod stats;
pub mod subscriptions;
pub mod users;
