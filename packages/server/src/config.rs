use std::env;
use tracing::warn;

/// Process configuration sourced from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: String,
    pub database_namespace: String,
    pub database_name: String,
}

impl ServerConfig {
    /// Read configuration from the environment, falling back to
    /// development defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|e| {
                ConfigError::InvalidFormat(format!("PORT must be a TCP port, got {raw:?}: {e}"))
            })?,
            Err(_) => {
                warn!("PORT not set, defaulting to 3000");
                3000
            },
        };

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            warn!("DATABASE_URL not set, using in-memory storage (development only)");
            "memory".to_string()
        });

        let database_namespace =
            env::var("DATABASE_NAMESPACE").unwrap_or_else(|_| "roomboard".to_string());
        let database_name = env::var("DATABASE_NAME").unwrap_or_else(|_| "listings".to_string());

        Ok(Self { port, database_url, database_namespace, database_name })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid format for environment variable: {0}")]
    InvalidFormat(String),
}
