//! Service layer for user operations.

mod user_service;

pub use user_service::{UserManager, UserService};
