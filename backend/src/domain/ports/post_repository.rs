//! Driven port for post persistence.
use async_trait::async_trait;

use crate::domain::{Post, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by post repository adapters.
    pub enum PostPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "post repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "post repository query failed: {message}",
        /// The author was deleted before the post could be stored.
        MissingAuthor => "post author does not exist",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a new post.
    async fn insert(&self, post: &Post) -> Result<(), PostPersistenceError>;

    /// Posts written by `author_id`, newest first.
    ///
    /// Posts sharing a timestamp are returned newest insert first.
    async fn list_by_author(&self, author_id: &UserId) -> Result<Vec<Post>, PostPersistenceError>;
}
