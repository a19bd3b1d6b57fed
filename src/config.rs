//! # Configuration Management
//!
//! Environment-driven configuration in the shape the rest of the FRED
//! deployment expects: sensible defaults, explicit env overrides, and a
//! helper to open the database pool.

use crate::error::{FredError, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

#[derive(Debug, Clone)]
pub struct FredConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub environment: String,
}

impl Default for FredConfig {
    fn default() -> Self {
        Self {
            database_url: "postgresql://localhost/fred_development".to_string(),
            max_connections: 10,
            environment: "development".to_string(),
        }
    }
}

impl FredConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(db_url) = std::env::var("DATABASE_URL") {
            config.database_url = db_url;
        }

        if let Ok(max_connections) = std::env::var("FRED_MAX_CONNECTIONS") {
            config.max_connections = max_connections.parse().map_err(|e| {
                FredError::Configuration(format!("Invalid max_connections: {e}"))
            })?;
        }

        if let Ok(environment) = std::env::var("FRED_ENV") {
            config.environment = environment;
        }

        Ok(config)
    }

    /// Open a Postgres pool with this configuration.
    pub async fn connect(&self) -> Result<PgPool> {
        let pool = PgPoolOptions::new()
            .max_connections(self.max_connections)
            .connect(&self.database_url)
            .await?;
        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FredConfig::default();
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.environment, "development");
        assert!(config.database_url.starts_with("postgresql://"));
    }
}
