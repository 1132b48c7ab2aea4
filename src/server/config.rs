use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - `DATABASE_URL` is set and `BIND_ADDRESS`, if set, parses
    /// - `Err(AppError::ConfigErr)` - A variable is missing or malformed
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;
        let bind_address = std::env::var("BIND_ADDRESS").ok();

        Self::from_values(database_url, bind_address)
    }

    fn from_values(database_url: String, bind_address: Option<String>) -> Result<Self, AppError> {
        let bind_address = bind_address.unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: "BIND_ADDRESS".to_string(),
                value: bind_address.clone(),
            })?;

        Ok(Self {
            database_url,
            bind_address,
        })
    }
}
