//! PostgreSQL-backed `FollowerRepository`.
//!
//! Uniqueness of `(user_id, follower_id)` is the table's primary key, so
//! concurrent duplicate follows converge on one row via
//! `ON CONFLICT DO NOTHING`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{FollowerPersistenceError, FollowerRepository};
use crate::domain::{DisplayName, FollowerEdge, FollowerSummary, UserId};

use super::diesel_error_mapping::{is_foreign_key_violation, map_diesel_error, map_pool_error};
use super::models::NewFollowerRow;
use super::pool::{DbPool, PoolError};
use super::schema::{followers, users};

/// Diesel-backed follower edge repository.
#[derive(Clone)]
pub struct DieselFollowerRepository {
    pool: DbPool,
}

impl DieselFollowerRepository {
    /// Build a repository drawing connections from `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool(error: PoolError) -> FollowerPersistenceError {
    map_pool_error(error, FollowerPersistenceError::connection)
}

fn map_diesel(error: diesel::result::Error) -> FollowerPersistenceError {
    if is_foreign_key_violation(&error) {
        return FollowerPersistenceError::missing_endpoint();
    }
    map_diesel_error(
        error,
        FollowerPersistenceError::query,
        FollowerPersistenceError::connection,
    )
}

#[async_trait]
impl FollowerRepository for DieselFollowerRepository {
    async fn insert_if_absent(
        &self,
        edge: &FollowerEdge,
    ) -> Result<bool, FollowerPersistenceError> {
        let row = NewFollowerRow {
            user_id: *edge.user_id().as_uuid(),
            follower_id: *edge.follower_id().as_uuid(),
        };
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let inserted = diesel::insert_into(followers::table)
            .values(&row)
            .on_conflict((followers::user_id, followers::follower_id))
            .do_nothing()
            .execute(&mut conn)
            .await
            .map_err(map_diesel)?;
        Ok(inserted > 0)
    }

    async fn remove(
        &self,
        user_id: &UserId,
        follower_id: &UserId,
    ) -> Result<bool, FollowerPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let removed = diesel::delete(
            followers::table.filter(
                followers::user_id
                    .eq(user_id.as_uuid())
                    .and(followers::follower_id.eq(follower_id.as_uuid())),
            ),
        )
            .execute(&mut conn)
            .await
            .map_err(map_diesel)?;
        Ok(removed > 0)
    }

    async fn exists(
        &self,
        user_id: &UserId,
        follower_id: &UserId,
    ) -> Result<bool, FollowerPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        diesel::select(diesel::dsl::exists(
            followers::table.filter(
                followers::user_id
                    .eq(user_id.as_uuid())
                    .and(followers::follower_id.eq(follower_id.as_uuid())),
            ),
        ))
            .get_result(&mut conn)
            .await
            .map_err(map_diesel)
    }

    async fn followers_of(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<FollowerSummary>, FollowerPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let rows: Vec<(Uuid, String)> = followers::table
            .inner_join(users::table.on(users::id.eq(followers::follower_id)))
            .filter(followers::user_id.eq(user_id.as_uuid()))
            .order(followers::seq.asc())
            .select((users::id, users::name))
            .load(&mut conn)
            .await
            .map_err(map_diesel)?;

        rows.into_iter()
            .map(|(id, name)| {
                let display_name = DisplayName::new(name).map_err(|err| {
                    FollowerPersistenceError::query(format!("stored user name invalid: {err}"))
                })?;
                Ok(FollowerSummary {
                    follower_id: UserId::from_uuid(id),
                    display_name,
                })
            })
            .collect()
    }
}
