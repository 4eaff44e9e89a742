//! Driving port for user lifecycle use cases.
//!
//! Inbound adapters create, read, update and delete users through this port.
//! Requests carry raw optional fields; implementations validate them and
//! report every violation at once.

use async_trait::async_trait;

use crate::domain::{SocialError, User, UserId};

/// Unvalidated name and age as supplied by a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfileRequest {
    pub name: Option<String>,
    pub age: Option<i64>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Validate and store a new user.
    async fn create(&self, request: UserProfileRequest) -> Result<User, SocialError>;

    /// Fetch one user.
    async fn get(&self, id: &UserId) -> Result<User, SocialError>;

    /// Check whether a user exists without loading it into the caller.
    async fn exists(&self, id: &UserId) -> Result<bool, SocialError>;

    /// Replace a user's name and age.
    async fn update(&self, id: &UserId, request: UserProfileRequest) -> Result<(), SocialError>;

    /// Delete a user together with their edges and posts.
    async fn delete(&self, id: &UserId) -> Result<(), SocialError>;

    /// Every user in creation order.
    async fn list_all(&self) -> Result<Vec<User>, SocialError>;
}
