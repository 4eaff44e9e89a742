//! Post visibility authorization.
//!
//! A requester may read a user's posts only while following them. The check
//! is an explicit state machine so each transition and the final denial
//! reason show up in logs and tests:
//!
//! ```text
//! Start -> TargetChecked -> FollowerChecked -> Authorized
//!   \            \                 \
//!    `-----------`-----------------`-------> Denied(reason)
//! ```
//!
//! Rules are evaluated in order and the first failure wins.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{FollowerGraph, PostStore, UserDirectory, VisiblePostsQuery};
use crate::domain::{Post, SocialError, UserId};

/// Why a requester may not see a user's posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    /// The user whose posts were requested does not exist.
    TargetNotFound(UserId),
    /// No requester id was supplied.
    MissingFollowerId,
    /// The requester id names no user.
    UnknownFollowerId,
    /// The requester exists but does not follow the target.
    NotAFollower,
}

impl From<DenialReason> for SocialError {
    fn from(reason: DenialReason) -> Self {
        match reason {
            DenialReason::TargetNotFound(id) => Self::UserNotFound(id),
            DenialReason::MissingFollowerId => Self::MissingFollowerId,
            DenialReason::UnknownFollowerId => Self::UnknownFollowerId,
            DenialReason::NotAFollower => Self::NotAFollower,
        }
    }
}

/// Progress of a single visibility decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityState {
    /// Nothing checked yet.
    Start,
    /// The target user exists.
    TargetChecked,
    /// The requester is present and names a known user.
    FollowerChecked(UserId),
    /// The requester follows the target.
    Authorized,
    /// The request was refused.
    Denied(DenialReason),
}

impl VisibilityState {
    fn is_terminal(self) -> bool {
        matches!(self, Self::Authorized | Self::Denied(_))
    }
}

/// Gatekeeper composing the user directory, follower graph and post store.
#[derive(Clone)]
pub struct VisibilityAuthorizer {
    users: Arc<dyn UserDirectory>,
    graph: Arc<dyn FollowerGraph>,
    posts: Arc<dyn PostStore>,
}

impl VisibilityAuthorizer {
    pub fn new(
        users: Arc<dyn UserDirectory>,
        graph: Arc<dyn FollowerGraph>,
        posts: Arc<dyn PostStore>,
    ) -> Self {
        Self {
            users,
            graph,
            posts,
        }
    }

    /// Run the state machine to a terminal state.
    ///
    /// Store faults abort the decision with the underlying error.
    pub async fn authorize(
        &self,
        target: &UserId,
        follower_id: Option<UserId>,
    ) -> Result<VisibilityState, SocialError> {
        let mut state = VisibilityState::Start;
        while !state.is_terminal() {
            let next = self.step(state, target, follower_id).await?;
            debug!(%target, from = ?state, to = ?next, "visibility transition");
            state = next;
        }
        Ok(state)
    }

    async fn step(
        &self,
        state: VisibilityState,
        target: &UserId,
        follower_id: Option<UserId>,
    ) -> Result<VisibilityState, SocialError> {
        use VisibilityState::{Authorized, Denied, FollowerChecked, Start, TargetChecked};

        let next = match state {
            Start => {
                if self.users.exists(target).await? {
                    TargetChecked
                } else {
                    Denied(DenialReason::TargetNotFound(*target))
                }
            }
            TargetChecked => match follower_id {
                None => Denied(DenialReason::MissingFollowerId),
                Some(follower) => {
                    if self.users.exists(&follower).await? {
                        FollowerChecked(follower)
                    } else {
                        Denied(DenialReason::UnknownFollowerId)
                    }
                }
            },
            // A user is never implicitly their own follower; only an edge counts.
            FollowerChecked(follower) => {
                if self.graph.is_following(&follower, target).await? {
                    Authorized
                } else {
                    Denied(DenialReason::NotAFollower)
                }
            }
            terminal @ (Authorized | Denied(_)) => terminal,
        };
        Ok(next)
    }
}

#[async_trait]
impl VisiblePostsQuery for VisibilityAuthorizer {
    async fn list_visible_posts(
        &self,
        target: &UserId,
        follower_id: Option<UserId>,
    ) -> Result<Vec<Post>, SocialError> {
        match self.authorize(target, follower_id).await? {
            VisibilityState::Authorized => self.posts.list_by_user(target).await,
            VisibilityState::Denied(reason) => {
                warn!(%target, ?follower_id, ?reason, "post listing denied");
                Err(reason.into())
            }
            state => Err(SocialError::internal(format!(
                "visibility check stopped in non-terminal state {state:?}"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "visibility_service_tests.rs"]
mod tests;
