//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with environment variable
//! overrides for sensitive values: `DATABASE_URL` replaces the whole
//! `[database]` section and `STAFFDESK_DB_PASSWORD` replaces the password.
//!
//! # Example
//!
//! ```no_run
//! use staffdesk::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Database connection settings.
    pub database: DatabaseConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Connection parameters for the Postgres database.
#[derive(Debug, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub dbname: String,
    pub user: String,
    #[serde(default)]
    pub password: String,
    /// Maximum number of pooled connections.
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
    /// Full connection URL taken from `DATABASE_URL`; wins over the
    /// individual fields above when set.
    #[serde(skip)]
    pub url_override: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

fn default_port() -> u16 {
    5432
}

fn default_pool_size() -> u32 {
    5
}

impl Config {
    /// Load configuration from a TOML file, apply environment overrides,
    /// and validate the result.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config = Self::parse_toml(&content)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string without validating it.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(password) = std::env::var("STAFFDESK_DB_PASSWORD") {
            self.database.password = password;
        }
        if let Ok(url) = std::env::var("DATABASE_URL") {
            self.database.url_override = Some(url);
        }
    }

    fn validate(&self) -> Result<()> {
        // A full URL override supplies every connection parameter at once.
        if self.database.url_override.is_some() {
            return Ok(());
        }
        if self.database.host.is_empty() {
            return Err(ConfigError::MissingField { field: "host" }.into());
        }
        if self.database.dbname.is_empty() {
            return Err(ConfigError::MissingField { field: "dbname" }.into());
        }
        if self.database.user.is_empty() {
            return Err(ConfigError::MissingField { field: "user" }.into());
        }
        if self.database.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "port",
                reason: "must be nonzero".to_string(),
            }
            .into());
        }
        if self.database.pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pool_size",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize the tracing subscriber from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

impl DatabaseConfig {
    /// Connection URL for the configured database.
    pub fn url(&self) -> String {
        if let Some(url) = &self.url_override {
            return url.clone();
        }
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.dbname
        )
    }
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}
