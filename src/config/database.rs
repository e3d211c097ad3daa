//! PostgreSQL connection settings

use serde::Deserialize;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use super::error::ValidationError;

/// Largest pool the service will open.
pub const MAX_POOL_SIZE: u32 = 50;

/// Where the polls schema lives and how many connections to hold.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// `postgres://` or `postgresql://` URL (`POLLS__DATABASE__URL`)
    pub url: String,

    #[serde(default = "DatabaseConfig::default_pool_size")]
    pub pool_size: u32,

    /// How long a request waits for a free connection
    #[serde(default = "DatabaseConfig::default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,

    /// Apply `migrations/` before serving
    #[serde(default)]
    pub run_migrations: bool,
}

impl DatabaseConfig {
    fn default_pool_size() -> u32 {
        10
    }

    fn default_acquire_timeout_secs() -> u64 {
        5
    }

    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            pool_size: Self::default_pool_size(),
            acquire_timeout_secs: Self::default_acquire_timeout_secs(),
            run_migrations: false,
        }
    }

    pub fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.pool_size)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
    }

    /// Open the pool.
    pub async fn connect(&self) -> Result<PgPool, sqlx::Error> {
        self.pool_options().connect(&self.url).await
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE__URL"));
        }
        match self.url.split_once("://") {
            Some(("postgres" | "postgresql", rest)) if !rest.is_empty() => {}
            _ => return Err(ValidationError::InvalidDatabaseUrl),
        }
        if self.pool_size == 0 {
            return Err(ValidationError::InvalidPoolSize);
        }
        if self.pool_size > MAX_POOL_SIZE {
            return Err(ValidationError::PoolSizeTooLarge(MAX_POOL_SIZE));
        }
        Ok(())
    }
}
