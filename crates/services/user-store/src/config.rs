//! User store configuration.

use std::env;

use common::{AppError, AppResult};
use domain::constants::DEFAULT_SAMPLE_USERS;

/// User store configuration.
#[derive(Debug, Clone)]
pub struct UserStoreConfig {
    /// Number of sample users seeded into a fresh store
    pub seed_count: usize,
}

impl UserStoreConfig {
    /// Load configuration from environment variables.
    ///
    /// `USER_STORE_SEED_COUNT` overrides the default sample size. An unset
    /// variable falls back to the default; a value that does not parse is
    /// rejected rather than silently replaced.
    pub fn from_env() -> AppResult<Self> {
        let seed_count = match env::var("USER_STORE_SEED_COUNT") {
            Ok(raw) => raw.parse().map_err(|_| {
                AppError::validation("USER_STORE_SEED_COUNT must be a non-negative integer")
            })?,
            Err(_) => DEFAULT_SAMPLE_USERS,
        };

        Ok(Self { seed_count })
    }
}

impl Default for UserStoreConfig {
    fn default() -> Self {
        Self {
            seed_count: DEFAULT_SAMPLE_USERS,
        }
    }
}
