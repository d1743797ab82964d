//! Configuration management
//!
//! This module handles loading and parsing configuration for the landing backend.
//! Configuration can be loaded from:
//! - config.yml file
//! - Environment variables (override file settings)
//!
//! Missing optional values are filled with sensible defaults. In particular
//! there is no default database: without `DATABASE_URL` (or `database.url`)
//! the server runs with persistence unavailable.

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Blog listing configuration
    #[serde(default)]
    pub blog: BlogConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
    /// CORS allowed origin, `*` allows any origin
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cors_origin() -> String {
    "*".to_string()
}

/// Database configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL. `None` means no database is configured.
    #[serde(default)]
    pub url: Option<String>,
}

impl DatabaseConfig {
    /// Configuration pointing at the given URL
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }

    /// Driver selected by the configured URL, if any
    pub fn driver(&self) -> Option<DatabaseDriver> {
        self.url.as_deref().map(DatabaseDriver::from_url)
    }
}

/// Database driver type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseDriver {
    /// SQLite (default)
    #[default]
    Sqlite,
    /// MySQL
    Mysql,
}

impl DatabaseDriver {
    /// Pick the driver from a connection URL.
    ///
    /// `mysql://` URLs select MySQL; anything else (a file path, a `sqlite:`
    /// URL or `:memory:`) is treated as SQLite.
    pub fn from_url(url: &str) -> Self {
        if url.trim_start().to_lowercase().starts_with("mysql://") {
            Self::Mysql
        } else {
            Self::Sqlite
        }
    }
}

impl std::fmt::Display for DatabaseDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite => write!(f, "sqlite"),
            Self::Mysql => write!(f, "mysql"),
        }
    }
}

/// Blog listing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogConfig {
    /// Serve the built-in demo post when the store cannot be read
    #[serde(default = "default_degrade_to_demo_content")]
    pub degrade_to_demo_content: bool,
    /// Maximum number of posts returned by the listing
    #[serde(default = "default_listing_limit")]
    pub listing_limit: i64,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            degrade_to_demo_content: default_degrade_to_demo_content(),
            listing_limit: default_listing_limit(),
        }
    }
}

fn default_degrade_to_demo_content() -> bool {
    true
}

fn default_listing_limit() -> i64 {
    20
}

/// Error type for configuration parsing
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {message}")]
    ParseError {
        path: String,
        message: String,
    },
}

impl Config {
    /// Load configuration from file
    ///
    /// If the file doesn't exist, returns default configuration.
    /// If the file exists but is invalid YAML, returns an error with details.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;

        // Handle empty file - return defaults
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&content).map_err(|e| {
            ConfigError::ParseError {
                path: path.display().to_string(),
                message: format_yaml_error(&e),
            }
        })?;

        Ok(config)
    }

    /// Load configuration from file with environment variable overrides
    ///
    /// Recognised variables:
    /// - HOST
    /// - PORT
    /// - CORS_ORIGIN
    /// - DATABASE_URL
    /// - BLOG_DEMO_FALLBACK
    pub fn load_with_env(path: &std::path::Path) -> anyhow::Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides to the configuration
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            match port.parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(e) => tracing::warn!("Ignoring invalid PORT value {:?}: {}", port, e),
            }
        }
        if let Ok(cors_origin) = std::env::var("CORS_ORIGIN") {
            self.server.cors_origin = cors_origin;
        }

        if let Ok(url) = std::env::var("DATABASE_URL") {
            if !url.trim().is_empty() {
                self.database.url = Some(url);
            }
        }

        if let Ok(fallback) = std::env::var("BLOG_DEMO_FALLBACK") {
            match fallback.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.blog.degrade_to_demo_content = true,
                "0" | "false" | "no" | "off" => self.blog.degrade_to_demo_content = false,
                _ => {} // Ignore invalid values
            }
        }
    }
}

/// Format YAML parsing error with location and context
fn format_yaml_error(e: &serde_yaml::Error) -> String {
    if let Some(location) = e.location() {
        format!(
            "at line {}, column {}: {}",
            location.line(),
            location.column(),
            e
        )
    } else {
        e.to_string()
    }
}

// Shared by every test that touches process environment variables.
#[cfg(test)]
static CONFIG_ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn valid_config_strategy() -> impl Strategy<Value = Config> {
        (
            "[a-z][a-z0-9]{0,10}",
            1u16..=65535,
            proptest::option::of("[a-z][a-z0-9_/]{0,20}\\.db"),
            any::<bool>(),
            1i64..100,
        )
            .prop_map(|(host, port, url, degrade, limit)| Config {
                server: ServerConfig {
                    host,
                    port,
                    cors_origin: default_cors_origin(),
                },
                database: DatabaseConfig { url },
                blog: BlogConfig {
                    degrade_to_demo_content: degrade,
                    listing_limit: limit,
                },
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        /// Serialising a config to YAML and parsing it back preserves it
        #[test]
        fn config_yaml_roundtrip(config in valid_config_strategy()) {
            let yaml = serde_yaml::to_string(&config).unwrap();
            let parsed: Config = serde_yaml::from_str(&yaml).unwrap();

            prop_assert_eq!(parsed.server.host, config.server.host);
            prop_assert_eq!(parsed.server.port, config.server.port);
            prop_assert_eq!(parsed.database.url, config.database.url);
            prop_assert_eq!(
                parsed.blog.degrade_to_demo_content,
                config.blog.degrade_to_demo_content
            );
            prop_assert_eq!(parsed.blog.listing_limit, config.blog.listing_limit);
        }
    }
}
