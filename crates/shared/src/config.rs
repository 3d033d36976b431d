//! Application configuration management.

use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Report export configuration.
    #[serde(default)]
    pub report: ReportConfig,
    /// Allocation behaviour switches.
    #[serde(default)]
    pub allocation: AllocationConfig,
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Report export configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Directory CSV reports are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Currency used when no unit is available to derive one from.
    #[serde(default)]
    pub default_currency: Currency,
}

fn default_output_dir() -> String {
    "reports".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            default_currency: Currency::default(),
        }
    }
}

/// How a member's contribution end date affects allocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndDatePolicy {
    /// End dates are informational; every member stays in the pool.
    #[default]
    Ignore,
    /// Members whose end date lies before the month being computed are
    /// removed from the pool.
    ExcludeExpired,
}

/// Allocation behaviour switches.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct AllocationConfig {
    /// Treatment of contribution end dates.
    #[serde(default)]
    pub end_date_policy: EndDatePolicy,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `COLIVING__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("COLIVING").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
