use std::env;
use thiserror::Error;

/// Infrastructure settings read once at startup
#[derive(Debug, Clone)]
pub struct BootstrapSettings {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub cors_origin: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
}

impl BootstrapSettings {
    /// Load bootstrap settings from environment variables, falling back to
    /// development defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://accounts.db?mode=rwc".to_string());

        let server_host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port_value = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let server_port = port_value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port_value))?;

        let cors_origin =
            env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".to_string());

        Ok(Self {
            database_url,
            server_host,
            server_port,
            cors_origin,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
