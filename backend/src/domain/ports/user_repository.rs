//! Driven port for user persistence.
use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Storage for [`User`] records.
///
/// Adapters must make [`UserRepository::delete_cascade`] a single atomic
/// unit: once it returns, no follower edge touching the user and no post
/// authored by the user remains.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a newly created user.
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError>;

    /// Replace the profile of an existing user.
    ///
    /// Returns `false` when no user with that id exists.
    async fn update(&self, user: &User) -> Result<bool, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Every user, oldest first.
    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Delete the user's edges, then their posts, then the user.
    ///
    /// Returns `false` when no user with that id exists.
    async fn delete_cascade(&self, id: &UserId) -> Result<bool, UserPersistenceError>;
}
