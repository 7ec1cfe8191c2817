//! Configuration for Inventory API

use core_config::{
    AppInfo, ConfigError, FromEnv, app_info, env_optional, env_parse, server::ServerConfig,
};
use database::postgres::PostgresConfig;
use domain_inventory::service::DEFAULT_LOW_STOCK_THRESHOLD;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Empty means any origin
    pub cors_origins: Vec<String>,
    pub low_stock_threshold: i32,
    /// Insert demo data when the stores table is empty
    pub seed_database: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // Required - will fail if not set
        let server = ServerConfig::from_env()?;

        let cors_origins = env_optional("CORS_ALLOWED_ORIGIN")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_default();

        let low_stock_threshold = env_parse("LOW_STOCK_THRESHOLD", DEFAULT_LOW_STOCK_THRESHOLD)?;
        if low_stock_threshold < 0 {
            return Err(ConfigError::ParseError {
                key: "LOW_STOCK_THRESHOLD".to_string(),
                details: "must not be negative".to_string(),
            });
        }

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
            cors_origins,
            low_stock_threshold,
            seed_database: env_parse("SEED_DATABASE", false)?,
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
