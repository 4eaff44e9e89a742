//! Driven port for the follower edge store.
use async_trait::async_trait;

use crate::domain::{FollowerEdge, FollowerSummary, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by follower repository adapters.
    pub enum FollowerPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "follower repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "follower repository query failed: {message}",
        /// One endpoint of the edge no longer exists.
        MissingEndpoint => "follower edge references a missing user",
    }
}

/// Storage for directed follower edges.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowerRepository: Send + Sync {
    /// Store the edge unless it is already present.
    ///
    /// Returns `true` when a new edge was written. Adapters reject edges whose
    /// endpoints are missing at write time with
    /// [`FollowerPersistenceError::MissingEndpoint`].
    async fn insert_if_absent(&self, edge: &FollowerEdge)
    -> Result<bool, FollowerPersistenceError>;

    /// Remove the edge `follower_id -> user_id`; `false` when it was absent.
    async fn remove(
        &self,
        user_id: &UserId,
        follower_id: &UserId,
    ) -> Result<bool, FollowerPersistenceError>;

    /// Whether `follower_id` follows `user_id`.
    async fn exists(
        &self,
        user_id: &UserId,
        follower_id: &UserId,
    ) -> Result<bool, FollowerPersistenceError>;

    /// Followers of `user_id` in edge creation order.
    async fn followers_of(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<FollowerSummary>, FollowerPersistenceError>;
}
