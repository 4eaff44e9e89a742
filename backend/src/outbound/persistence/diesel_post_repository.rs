//! PostgreSQL-backed `PostRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PostPersistenceError, PostRepository};
use crate::domain::{Post, PostId, PostText, UserId};

use super::diesel_error_mapping::{is_foreign_key_violation, map_diesel_error, map_pool_error};
use super::models::{NewPostRow, PostRow};
use super::pool::{DbPool, PoolError};
use super::schema::posts;

/// Diesel-backed post repository.
#[derive(Clone)]
pub struct DieselPostRepository {
    pool: DbPool,
}

impl DieselPostRepository {
    /// Build a repository drawing connections from `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool(error: PoolError) -> PostPersistenceError {
    map_pool_error(error, PostPersistenceError::connection)
}

fn map_diesel(error: diesel::result::Error) -> PostPersistenceError {
    if is_foreign_key_violation(&error) {
        return PostPersistenceError::missing_author();
    }
    map_diesel_error(
        error,
        PostPersistenceError::query,
        PostPersistenceError::connection,
    )
}

fn row_to_post(row: PostRow) -> Result<Post, PostPersistenceError> {
    let text = PostText::new(row.post_text)
        .map_err(|err| PostPersistenceError::query(format!("stored post text invalid: {err}")))?;
    Ok(Post::new(
        PostId::from_uuid(row.id),
        UserId::from_uuid(row.user_id),
        text,
        row.created_at,
    ))
}

#[async_trait]
impl PostRepository for DieselPostRepository {
    async fn insert(&self, post: &Post) -> Result<(), PostPersistenceError> {
        let row = NewPostRow {
            id: *post.id().as_uuid(),
            user_id: *post.author_id().as_uuid(),
            post_text: post.text().as_ref(),
            created_at: post.created_at(),
        };
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        diesel::insert_into(posts::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel)
    }

    async fn list_by_author(&self, author_id: &UserId) -> Result<Vec<Post>, PostPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        posts::table
            .filter(posts::user_id.eq(author_id.as_uuid()))
            .order((posts::created_at.desc(), posts::seq.desc()))
            .select(PostRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel)?
            .into_iter()
            .map(row_to_post)
            .collect()
    }
}
