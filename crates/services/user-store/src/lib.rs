//! User Store Library
//!
//! This crate provides an in-memory user store behind a repository trait,
//! plus the service facade that callers talk to. The store is explicitly
//! constructed by a composition root and shared by handle; there is no
//! process-wide static.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use common::AppResult;

use crate::config::UserStoreConfig;
use crate::infra::seed;
use crate::repository::UserStore;
use crate::service::{UserManager, UserService};

/// Build a user service backed by a freshly seeded in-memory store.
pub fn build_user_service(config: &UserStoreConfig) -> Arc<dyn UserService> {
    let users = seed::sample_users(config.seed_count);
    info!(count = users.len(), "seeded in-memory user store");

    let repo = Arc::new(UserStore::with_users(users));
    Arc::new(UserManager::new(repo))
}

/// Build a user service from environment configuration.
pub fn bootstrap() -> AppResult<Arc<dyn UserService>> {
    let config = UserStoreConfig::from_env()?;
    Ok(build_user_service(&config))
}
