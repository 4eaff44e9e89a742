//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see the driving ports,
//! so they stay testable without any storage.

use std::sync::Arc;

use crate::domain::ports::{FollowerGraph, PostStore, UserDirectory, VisiblePostsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserDirectory>,
    pub followers: Arc<dyn FollowerGraph>,
    pub posts: Arc<dyn PostStore>,
    pub visible_posts: Arc<dyn VisiblePostsQuery>,
}

impl HttpState {
    pub fn new(
        users: Arc<dyn UserDirectory>,
        followers: Arc<dyn FollowerGraph>,
        posts: Arc<dyn PostStore>,
        visible_posts: Arc<dyn VisiblePostsQuery>,
    ) -> Self {
        Self {
            users,
            followers,
            posts,
            visible_posts,
        }
    }
}
