// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    api_key: String,
    database_max_connections: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://articles.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".into()
}

fn default_max_connections() -> u32 {
    16
}

/// `.env` next to the binary, or one directory up while developing.
pub fn dotenv_path() -> &'static str {
    match env::var("ENVIRONMENT").as_deref() {
        Ok("development") => "../.env",
        _ => ".env",
    }
}

impl AppConfig {
    /// Build configuration from environment variables. Uses defaults for
    /// optional values and validates required keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::from_filename(dotenv_path()) {
            tracing::debug!(error = %err, "no dotenv file loaded");
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same rules as [`AppConfig::from_env`] but reading from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let api_key = lookup("API_KEY").ok_or(ConfigError::Missing("API_KEY"))?;
        if api_key.trim().is_empty() {
            return Err(ConfigError::Invalid("API_KEY must not be blank".into()));
        }

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid(format!(
                        "DATABASE_MAX_CONNECTIONS must be a positive integer, got {raw:?}"
                    ))
                })?,
            None => default_max_connections(),
        };

        Ok(Self {
            database_url,
            listen_addr,
            api_key,
            database_max_connections,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }
}
