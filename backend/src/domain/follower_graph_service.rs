//! Follow relationship service.
//!
//! Enforces the graph invariants on top of the user and follower
//! repositories: no self-follow, both endpoints must exist, and at most one
//! edge per ordered pair.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    FollowerGraph, FollowerPersistenceError, FollowerRepository, UserRepository,
};
use crate::domain::{FollowerEdge, FollowerSummary, SocialError, UserId};

/// Follower graph backed by user and follower repositories.
#[derive(Clone)]
pub struct FollowerGraphService<U, F> {
    users: Arc<U>,
    followers: Arc<F>,
}

impl<U, F> FollowerGraphService<U, F> {
    /// Build the service over shared user and follower repositories.
    pub fn new(users: Arc<U>, followers: Arc<F>) -> Self {
        Self { users, followers }
    }
}

impl<U, F> FollowerGraphService<U, F>
where
    U: UserRepository,
{
    async fn require_user(&self, id: &UserId) -> Result<(), SocialError> {
        match self.users.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(SocialError::UserNotFound(*id)),
        }
    }
}

#[async_trait]
impl<U, F> FollowerGraph for FollowerGraphService<U, F>
where
    U: UserRepository,
    F: FollowerRepository,
{
    async fn follow(&self, user_id: &UserId, follower_id: &UserId) -> Result<(), SocialError> {
        let edge = FollowerEdge::new(*user_id, *follower_id).map_err(|_| SocialError::SelfFollow)?;
        self.require_user(user_id).await?;
        self.require_user(follower_id).await?;

        match self.followers.insert_if_absent(&edge).await {
            Ok(true) => {
                info!(%user_id, %follower_id, "follower added");
                Ok(())
            }
            Ok(false) => {
                debug!(%user_id, %follower_id, "follow already present");
                Ok(())
            }
            Err(FollowerPersistenceError::MissingEndpoint) => {
                // An endpoint was deleted after the existence checks.
                self.require_user(follower_id).await?;
                Err(SocialError::UserNotFound(*user_id))
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn unfollow(&self, user_id: &UserId, follower_id: &UserId) -> Result<(), SocialError> {
        self.require_user(user_id).await?;
        let removed = self.followers.remove(user_id, follower_id).await?;
        debug!(%user_id, %follower_id, removed, "unfollow processed");
        Ok(())
    }

    async fn followers_of(&self, user_id: &UserId) -> Result<Vec<FollowerSummary>, SocialError> {
        self.require_user(user_id).await?;
        Ok(self.followers.followers_of(user_id).await?)
    }

    async fn is_following(
        &self,
        follower_id: &UserId,
        user_id: &UserId,
    ) -> Result<bool, SocialError> {
        Ok(self.followers.exists(user_id, follower_id).await?)
    }
}

#[cfg(test)]
#[path = "follower_graph_service_tests.rs"]
mod tests;
