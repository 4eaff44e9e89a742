//! Directed follow relationship between two users.

use super::user::{DisplayName, UserId};

/// Returned when a user tries to follow themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("You can't follow yourself")]
pub struct SelfFollowError;

/// Edge meaning "`follower_id` follows `user_id`".
///
/// ## Invariants
/// - `follower_id != user_id`; enforced by [`FollowerEdge::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FollowerEdge {
    user_id: UserId,
    follower_id: UserId,
}

impl FollowerEdge {
    /// Build an edge from the followed user and the follower.
    ///
    /// # Examples
    /// ```
    /// use social_backend::domain::{FollowerEdge, UserId};
    ///
    /// let user = UserId::random();
    /// let follower = UserId::random();
    /// let edge = FollowerEdge::new(user, follower).expect("distinct users");
    /// assert_eq!(edge.user_id(), &user);
    /// assert!(FollowerEdge::new(user, user).is_err());
    /// ```
    pub fn new(user_id: UserId, follower_id: UserId) -> Result<Self, SelfFollowError> {
        if user_id == follower_id {
            return Err(SelfFollowError);
        }
        Ok(Self {
            user_id,
            follower_id,
        })
    }

    /// The user being followed.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// The user doing the following.
    pub fn follower_id(&self) -> &UserId {
        &self.follower_id
    }

    /// Whether `id` is either endpoint.
    pub fn touches(&self, id: &UserId) -> bool {
        &self.user_id == id || &self.follower_id == id
    }
}

/// Follower entry reported when listing a user's followers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowerSummary {
    pub follower_id: UserId,
    pub display_name: DisplayName,
}
