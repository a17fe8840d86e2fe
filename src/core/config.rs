use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub fixtures: FixtureConfig,
    #[serde(default)]
    pub latency: LatencyConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_num_threads")]
    pub num_threads: usize,
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureConfig {
    #[serde(default = "default_user_count")]
    pub user_count: usize,
}

/// Artificial per-method delay, emulating network round-trips for the
/// consuming UI. Zero everywhere is valid and is what tests use.
#[derive(Debug, Clone, Deserialize)]
pub struct LatencyConfig {
    #[serde(default = "default_list_users_ms")]
    pub list_users_ms: u64,
    #[serde(default = "default_update_user_ms")]
    pub update_user_ms: u64,
    #[serde(default = "default_delete_user_ms")]
    pub delete_user_ms: u64,
    #[serde(default = "default_stats_ms")]
    pub stats_ms: u64,
    #[serde(default = "default_subscriptions_ms")]
    pub subscriptions_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[allow(dead_code)]
    pub path: Option<PathBuf>,
    #[serde(default = "default_console")]
    pub console: bool,
}

// Default value functions
fn default_port() -> u16 {
    8080
}

fn default_num_threads() -> usize {
    num_cpus::get()
}

fn default_max_connections() -> usize {
    10000
}

fn default_user_count() -> usize {
    75
}

fn default_list_users_ms() -> u64 {
    500
}

fn default_update_user_ms() -> u64 {
    300
}

fn default_delete_user_ms() -> u64 {
    300
}

fn default_stats_ms() -> u64 {
    200
}

fn default_subscriptions_ms() -> u64 {
    400
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_console() -> bool {
    false
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            user_count: default_user_count(),
        }
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            list_users_ms: default_list_users_ms(),
            update_user_ms: default_update_user_ms(),
            delete_user_ms: default_delete_user_ms(),
            stats_ms: default_stats_ms(),
            subscriptions_ms: default_subscriptions_ms(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate server config
        if self.server.port == 0 {
            bail!("Server port must be greater than 0");
        }

        if self.server.num_threads == 0 {
            bail!("num_threads must be greater than 0");
        }

        if self.server.max_connections == 0 {
            bail!("max_connections must be greater than 0");
        }

        // Validate fixture config
        if self.fixtures.user_count == 0 {
            bail!("user_count must be greater than 0");
        }

        // Validate logging config
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        Ok(())
    }
}
