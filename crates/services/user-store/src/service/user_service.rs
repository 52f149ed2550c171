//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppResult, OptionExt};
use domain::User;

use crate::repository::UserRepository;

/// User service trait for dependency injection.
///
/// List, save, and delete keep the store's total contract; only the keyed
/// lookup can fail, with a `NotFound` for an unknown id.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get a user by ID
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// List all users in insertion order
    async fn list_users(&self) -> Vec<User>;

    /// Insert or replace a user, returning the saved value
    async fn save_user(&self, user: User) -> User;

    /// Delete a user; no-op when the user is not in the store
    async fn delete_user(&self, user: &User);
}

/// Concrete implementation of UserService using the repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.repo.find_by_id(id).await.ok_or_not_found()
    }

    async fn list_users(&self) -> Vec<User> {
        self.repo.list().await
    }

    async fn save_user(&self, user: User) -> User {
        self.repo.save(user).await
    }

    async fn delete_user(&self, user: &User) {
        self.repo.delete(user).await
    }
}
