// Application state (AppState)

use crate::core::config::Config;
use crate::core::startup::seed_store;
use crate::service::admin::AdminService;
use std::sync::Arc;

/// Shared application state
///
/// Holds the service facade every handler goes through. The fixture store
/// itself is private to the facade; handlers never touch it directly.
#[derive(Clone)]
pub struct AppState {
    /// Admin service facade over the seeded fixture store
    pub service: Arc<AdminService>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        let store = Arc::new(seed_store(config.fixtures.user_count));

        let service = Arc::new(AdminService::new(
            store,
            config.latency.clone(),
            config.fixtures.clone(),
        ));

        Self { service, config }
    }
}
