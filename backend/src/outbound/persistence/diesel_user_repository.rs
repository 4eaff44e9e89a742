//! PostgreSQL-backed `UserRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Age, DisplayName, User, UserId, UserProfile};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserProfileUpdate, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{followers, posts, users};

/// Diesel-backed user repository.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Build a repository drawing connections from `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool(error: PoolError) -> UserPersistenceError {
    map_pool_error(error, UserPersistenceError::connection)
}

fn map_diesel(error: diesel::result::Error) -> UserPersistenceError {
    map_diesel_error(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

fn age_column(user: &User) -> Result<i32, UserPersistenceError> {
    i32::try_from(user.age().value())
        .map_err(|_| UserPersistenceError::query("age exceeds column range"))
}

fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let display_name = DisplayName::new(row.name)
        .map_err(|err| UserPersistenceError::query(format!("stored user name invalid: {err}")))?;
    let age = Age::new(i64::from(row.age))
        .map_err(|err| UserPersistenceError::query(format!("stored user age invalid: {err}")))?;
    Ok(User::new(
        UserId::from_uuid(row.id),
        UserProfile { display_name, age },
        row.created_at,
    ))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let row = NewUserRow {
            id: *user.id().as_uuid(),
            name: user.display_name().as_ref(),
            age: age_column(user)?,
            created_at: user.created_at(),
        };
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        diesel::insert_into(users::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel)
    }

    async fn update(&self, user: &User) -> Result<bool, UserPersistenceError> {
        let changes = UserProfileUpdate {
            name: user.display_name().as_ref(),
            age: age_column(user)?,
        };
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let updated = diesel::update(users::table.find(*user.id().as_uuid()))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(map_diesel)?;
        Ok(updated > 0)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        users::table
            .find(*id.as_uuid())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel)?
            .map(row_to_user)
            .transpose()
    }

    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        users::table
            .order(users::seq.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel)?
            .into_iter()
            .map(row_to_user)
            .collect()
    }

    async fn delete_cascade(&self, id: &UserId) -> Result<bool, UserPersistenceError> {
        let id = *id.as_uuid();
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let (edges, authored, removed) = conn
            .transaction(|conn| {
                async move {
                    let edges = diesel::delete(
                        followers::table.filter(
                            followers::user_id
                                .eq(id)
                                .or(followers::follower_id.eq(id)),
                        ),
                    )
                    .execute(conn)
                    .await?;
                    let authored = diesel::delete(posts::table.filter(posts::user_id.eq(id)))
                        .execute(conn)
                        .await?;
                    let removed = diesel::delete(users::table.find(id)).execute(conn).await?;
                    Ok::<_, diesel::result::Error>((edges, authored, removed))
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel)?;
        debug!(user_id = %id, edges, authored, removed, "cascade delete committed");
        Ok(removed > 0)
    }
}
