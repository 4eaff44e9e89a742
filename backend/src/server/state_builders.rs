//! Wire the domain services over a concrete store.
//!
//! All three services share the same repository handles, so a user deleted
//! through the directory disappears from the follower graph and post store in
//! the same operation.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};

use crate::domain::ports::{
    FollowerGraph, FollowerRepository, PostRepository, PostStore, UserDirectory, UserRepository,
};
use crate::domain::{
    FollowerGraphService, PostStoreService, UserDirectoryService, VisibilityAuthorizer,
};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemorySocialStore;
use crate::outbound::persistence::{
    DbPool, DieselFollowerRepository, DieselPostRepository, DieselUserRepository,
};

use super::ServerConfig;

/// Compose the driving ports from repository adapters.
pub fn build_http_state<U, F, P>(
    users: Arc<U>,
    followers: Arc<F>,
    posts: Arc<P>,
    clock: Arc<dyn Clock>,
) -> HttpState
where
    U: UserRepository + 'static,
    F: FollowerRepository + 'static,
    P: PostRepository + 'static,
{
    let directory: Arc<dyn UserDirectory> =
        Arc::new(UserDirectoryService::new(Arc::clone(&users), Arc::clone(&clock)));
    let graph: Arc<dyn FollowerGraph> =
        Arc::new(FollowerGraphService::new(Arc::clone(&users), followers));
    let store: Arc<dyn PostStore> = Arc::new(PostStoreService::new(users, posts, clock));
    let visible_posts = Arc::new(VisibilityAuthorizer::new(
        Arc::clone(&directory),
        Arc::clone(&graph),
        Arc::clone(&store),
    ));
    HttpState::new(directory, graph, store, visible_posts)
}

/// Services over a fresh in-memory store.
pub fn in_memory_http_state(clock: Arc<dyn Clock>) -> HttpState {
    let store = Arc::new(InMemorySocialStore::new());
    build_http_state(Arc::clone(&store), Arc::clone(&store), store, clock)
}

/// Services over the PostgreSQL adapters.
pub fn diesel_http_state(pool: &DbPool, clock: Arc<dyn Clock>) -> HttpState {
    build_http_state(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(DieselFollowerRepository::new(pool.clone())),
        Arc::new(DieselPostRepository::new(pool.clone())),
        clock,
    )
}

pub(crate) fn http_state_for(config: &ServerConfig) -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    match &config.db_pool {
        Some(pool) => diesel_http_state(pool, clock),
        None => in_memory_http_state(clock),
    }
}
