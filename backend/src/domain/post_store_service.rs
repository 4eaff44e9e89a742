//! Post authoring service.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::ports::{PostPersistenceError, PostRepository, PostStore, UserRepository};
use crate::domain::{Post, PostId, SocialError, UserId, validate_post_text};

/// Post store backed by user and post repositories.
#[derive(Clone)]
pub struct PostStoreService<U, P> {
    users: Arc<U>,
    posts: Arc<P>,
    clock: Arc<dyn Clock>,
}

impl<U, P> PostStoreService<U, P> {
    /// Create a store that timestamps posts with `clock`.
    pub fn new(users: Arc<U>, posts: Arc<P>, clock: Arc<dyn Clock>) -> Self {
        Self {
            users,
            posts,
            clock,
        }
    }
}

#[async_trait]
impl<U, P> PostStore for PostStoreService<U, P>
where
    U: UserRepository,
    P: PostRepository,
{
    async fn create(&self, user_id: &UserId, text: Option<String>) -> Result<Post, SocialError> {
        let text = validate_post_text(text.as_deref()).map_err(SocialError::InvalidInput)?;
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(SocialError::UserNotFound(*user_id));
        }

        let post = Post::new(PostId::random(), *user_id, text, self.clock.utc());
        match self.posts.insert(&post).await {
            Ok(()) => {
                info!(%user_id, post_id = %post.id(), "post created");
                Ok(post)
            }
            Err(PostPersistenceError::MissingAuthor) => Err(SocialError::UserNotFound(*user_id)),
            Err(err) => Err(err.into()),
        }
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Post>, SocialError> {
        Ok(self.posts.list_by_author(user_id).await?)
    }
}

#[cfg(test)]
#[path = "post_store_service_tests.rs"]
mod tests;
