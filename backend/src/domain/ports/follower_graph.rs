//! Driving port for follow relationships.

use async_trait::async_trait;

use crate::domain::{FollowerSummary, SocialError, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowerGraph: Send + Sync {
    /// Make `follower_id` follow `user_id`. Repeating a follow succeeds
    /// without creating a second edge.
    async fn follow(&self, user_id: &UserId, follower_id: &UserId) -> Result<(), SocialError>;

    /// Remove the edge if present. Fails only when `user_id` is unknown.
    async fn unfollow(&self, user_id: &UserId, follower_id: &UserId) -> Result<(), SocialError>;

    /// Followers of `user_id` in edge creation order.
    async fn followers_of(&self, user_id: &UserId) -> Result<Vec<FollowerSummary>, SocialError>;

    /// Whether `follower_id` currently follows `user_id`.
    async fn is_following(
        &self,
        follower_id: &UserId,
        user_id: &UserId,
    ) -> Result<bool, SocialError>;
}
