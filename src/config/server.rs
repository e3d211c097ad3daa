//! HTTP listener settings

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// Longest request timeout accepted, in seconds.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Deployment profile.
///
/// Production switches logs to JSON and requires a full-length JWT secret.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

/// Settings for the listener and the router layers around it.
///
/// Every field has a default, so the whole section may be omitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// `ip:port` to listen on (`POLLS__SERVER__LISTEN`)
    pub listen: String,

    pub environment: Environment,

    /// Default `EnvFilter` directives; `RUST_LOG` wins when set
    pub log_level: String,

    /// Per-request timeout applied by the router
    pub request_timeout_secs: u64,

    /// Comma-separated origins allowed to call the API from a browser.
    /// Empty means no cross-origin access.
    pub allowed_origins: String,
}

impl ServerConfig {
    pub fn listen_addr(&self) -> Result<SocketAddr, ValidationError> {
        self.listen
            .parse()
            .map_err(|_| ValidationError::InvalidBindAddress(self.listen.clone()))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn allowed_origins(&self) -> Vec<String> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.listen_addr()?.port() == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout(MAX_REQUEST_TIMEOUT_SECS));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:8080".to_string(),
            environment: Environment::default(),
            log_level: "info,polls=debug,sqlx=warn,tower_http=info".to_string(),
            request_timeout_secs: 30,
            allowed_origins: String::new(),
        }
    }
}
