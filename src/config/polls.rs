//! Poll presentation settings

use serde::Deserialize;

use super::error::ValidationError;

/// Upper bound for the latest-questions listing.
pub const MAX_LATEST_LIMIT: u32 = 100;

/// Poll configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PollsConfig {
    /// Number of questions on the latest-questions listing
    #[serde(default = "default_latest_limit")]
    pub latest_limit: u32,
}

impl PollsConfig {
    /// Validate poll configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.latest_limit == 0 || self.latest_limit > MAX_LATEST_LIMIT {
            return Err(ValidationError::InvalidLatestLimit(MAX_LATEST_LIMIT));
        }
        Ok(())
    }
}

impl Default for PollsConfig {
    fn default() -> Self {
        Self {
            latest_limit: default_latest_limit(),
        }
    }
}

fn default_latest_limit() -> u32 {
    5
}
