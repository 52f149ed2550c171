//! In-memory user repository.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Save and delete match entries on the user id, so two values that differ
/// only in non-key fields refer to the same stored entry. All operations
/// are total: none of them fails on well-formed input.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> Option<User>;

    /// List all users in insertion order
    async fn list(&self) -> Vec<User>;

    /// Insert the user, or replace the entry with the same id in place
    async fn save(&self, user: User) -> User;

    /// Remove the entry with the same id, if present; no-op otherwise
    async fn delete(&self, user: &User);
}

/// Concrete in-memory implementation of [`UserRepository`].
///
/// The collection is guarded by an async `RwLock`: reads share the lock,
/// writes take it exclusively, so concurrent save/delete calls cannot
/// corrupt the list. Each operation is atomic; no ordering is guaranteed
/// across concurrent calls.
pub struct UserStore {
    users: RwLock<Vec<User>>,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }

    /// Create a store pre-populated with the given users
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: Uuid) -> Option<User> {
        self.users.read().await.iter().find(|u| u.id == id).cloned()
    }

    async fn list(&self) -> Vec<User> {
        // Snapshot, so callers iterate without holding the lock
        self.users.read().await.clone()
    }

    async fn save(&self, user: User) -> User {
        let mut users = self.users.write().await;

        match users.iter().position(|u| u.id == user.id) {
            Some(index) => {
                tracing::debug!(user_id = %user.id, index, "replacing user in place");
                users[index] = user.clone();
            }
            None => {
                tracing::debug!(user_id = %user.id, "appending new user");
                users.push(user.clone());
            }
        }

        user
    }

    async fn delete(&self, user: &User) {
        let mut users = self.users.write().await;

        if let Some(index) = users.iter().position(|u| u.id == user.id) {
            users.remove(index);
            tracing::debug!(user_id = %user.id, "deleted user");
        }
    }
}
