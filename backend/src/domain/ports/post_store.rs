//! Driving port for authoring and reading posts.

use async_trait::async_trait;

use crate::domain::{Post, SocialError, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Publish a post for `user_id`, stamped with the current time.
    async fn create(&self, user_id: &UserId, text: Option<String>) -> Result<Post, SocialError>;

    /// Posts by `user_id`, newest first. Performs no access control.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Post>, SocialError>;
}
