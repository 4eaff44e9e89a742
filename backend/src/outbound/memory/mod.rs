//! In-process store implementing every repository port.
//!
//! All state sits behind one mutex and every port method holds it for its
//! whole body, so each mutation (the delete cascade included) is a single
//! atomic unit and reads always observe completed writes.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    FollowerPersistenceError, FollowerRepository, PostPersistenceError, PostRepository,
    UserPersistenceError, UserRepository,
};
use crate::domain::{FollowerEdge, FollowerSummary, Post, User, UserId, sort_newest_first};

#[derive(Debug, Default)]
struct StoreState {
    users: HashMap<UserId, User>,
    /// User ids in insertion order.
    user_order: Vec<UserId>,
    /// Edges in creation order.
    edges: Vec<FollowerEdge>,
    edge_index: HashSet<FollowerEdge>,
    /// Posts in insertion order.
    posts: Vec<Post>,
}

impl StoreState {
    fn remove_user(&mut self, id: &UserId) -> bool {
        if self.users.remove(id).is_none() {
            return false;
        }
        let edges_before = self.edges.len();
        self.edges.retain(|edge| !edge.touches(id));
        self.edge_index.retain(|edge| !edge.touches(id));
        let posts_before = self.posts.len();
        self.posts.retain(|post| post.author_id() != id);
        self.user_order.retain(|candidate| candidate != id);
        debug!(
            user_id = %id,
            edges_removed = edges_before - self.edges.len(),
            posts_removed = posts_before - self.posts.len(),
            "cascade delete applied"
        );
        true
    }
}

/// Shared in-memory social graph store.
///
/// Wrap it in an `Arc` and hand the same instance to every service.
#[derive(Debug, Default)]
pub struct InMemorySocialStore {
    state: Mutex<StoreState>,
}

/// Returned when a previous holder of the store lock panicked.
struct Poisoned;

impl InMemorySocialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, Poisoned> {
        self.state.lock().map_err(|_| Poisoned)
    }
}

const POISONED: &str = "in-memory store lock poisoned";

impl From<Poisoned> for UserPersistenceError {
    fn from(_: Poisoned) -> Self {
        Self::query(POISONED)
    }
}

impl From<Poisoned> for FollowerPersistenceError {
    fn from(_: Poisoned) -> Self {
        Self::query(POISONED)
    }
}

impl From<Poisoned> for PostPersistenceError {
    fn from(_: Poisoned) -> Self {
        Self::query(POISONED)
    }
}

#[async_trait]
impl UserRepository for InMemorySocialStore {
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut state = self.lock()?;
        if state.users.insert(*user.id(), user.clone()).is_some() {
            return Err(UserPersistenceError::query(format!(
                "user {} already exists",
                user.id()
            )));
        }
        state.user_order.push(*user.id());
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<bool, UserPersistenceError> {
        let mut state = self.lock()?;
        match state.users.get_mut(user.id()) {
            Some(existing) => {
                *existing = user.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.lock()?.users.get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let state = self.lock()?;
        Ok(state
            .user_order
            .iter()
            .filter_map(|id| state.users.get(id).cloned())
            .collect())
    }

    async fn delete_cascade(&self, id: &UserId) -> Result<bool, UserPersistenceError> {
        Ok(self.lock()?.remove_user(id))
    }
}

#[async_trait]
impl FollowerRepository for InMemorySocialStore {
    async fn insert_if_absent(
        &self,
        edge: &FollowerEdge,
    ) -> Result<bool, FollowerPersistenceError> {
        let mut state = self.lock()?;
        if !state.users.contains_key(edge.user_id())
            || !state.users.contains_key(edge.follower_id())
        {
            return Err(FollowerPersistenceError::missing_endpoint());
        }
        if !state.edge_index.insert(*edge) {
            return Ok(false);
        }
        state.edges.push(*edge);
        Ok(true)
    }

    async fn remove(
        &self,
        user_id: &UserId,
        follower_id: &UserId,
    ) -> Result<bool, FollowerPersistenceError> {
        let Ok(edge) = FollowerEdge::new(*user_id, *follower_id) else {
            // Self edges are never stored.
            return Ok(false);
        };
        let mut state = self.lock()?;
        if !state.edge_index.remove(&edge) {
            return Ok(false);
        }
        state.edges.retain(|candidate| candidate != &edge);
        Ok(true)
    }

    async fn exists(
        &self,
        user_id: &UserId,
        follower_id: &UserId,
    ) -> Result<bool, FollowerPersistenceError> {
        let Ok(edge) = FollowerEdge::new(*user_id, *follower_id) else {
            return Ok(false);
        };
        Ok(self.lock()?.edge_index.contains(&edge))
    }

    async fn followers_of(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<FollowerSummary>, FollowerPersistenceError> {
        let state = self.lock()?;
        state
            .edges
            .iter()
            .filter(|edge| edge.user_id() == user_id)
            .map(|edge| {
                state
                    .users
                    .get(edge.follower_id())
                    .map(|follower| FollowerSummary {
                        follower_id: *follower.id(),
                        display_name: follower.display_name().clone(),
                    })
                    .ok_or_else(|| {
                        FollowerPersistenceError::query(format!(
                            "orphaned edge from {}",
                            edge.follower_id()
                        ))
                    })
            })
            .collect()
    }
}

#[async_trait]
impl PostRepository for InMemorySocialStore {
    async fn insert(&self, post: &Post) -> Result<(), PostPersistenceError> {
        let mut state = self.lock()?;
        if !state.users.contains_key(post.author_id()) {
            return Err(PostPersistenceError::missing_author());
        }
        state.posts.push(post.clone());
        Ok(())
    }

    async fn list_by_author(&self, author_id: &UserId) -> Result<Vec<Post>, PostPersistenceError> {
        let state = self.lock()?;
        // Newest insert first, so the stable sort leaves same-instant posts in
        // reverse insertion order.
        let mut posts: Vec<Post> = state
            .posts
            .iter()
            .rev()
            .filter(|post| post.author_id() == author_id)
            .cloned()
            .collect();
        sort_newest_first(&mut posts);
        Ok(posts)
    }
}
