//! Driving port for reading another user's posts as one of their followers.

use async_trait::async_trait;

use crate::domain::{Post, SocialError, UserId};

#[async_trait]
pub trait VisiblePostsQuery: Send + Sync {
    /// List the posts of `target` on behalf of `follower_id`.
    ///
    /// Fails with [`SocialError::UserNotFound`], [`SocialError::MissingFollowerId`],
    /// [`SocialError::UnknownFollowerId`] or [`SocialError::NotAFollower`],
    /// checked in that order.
    async fn list_visible_posts(
        &self,
        target: &UserId,
        follower_id: Option<UserId>,
    ) -> Result<Vec<Post>, SocialError>;
}
