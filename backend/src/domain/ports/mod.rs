//! Domain ports for the hexagonal boundary.
//!
//! Driving ports (`UserDirectory`, `FollowerGraph`, `PostStore`,
//! `VisiblePostsQuery`) are what inbound adapters call. Driven ports
//! (`*Repository`) are what the services call; each declares its own error
//! enum so adapters map their failures into predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod follower_graph;
mod follower_repository;
mod post_repository;
mod post_store;
mod user_directory;
mod user_repository;
mod visible_posts;

#[cfg(test)]
pub use follower_graph::MockFollowerGraph;
pub use follower_graph::FollowerGraph;
#[cfg(test)]
pub use follower_repository::MockFollowerRepository;
pub use follower_repository::{FollowerPersistenceError, FollowerRepository};
#[cfg(test)]
pub use post_repository::MockPostRepository;
pub use post_repository::{PostPersistenceError, PostRepository};
#[cfg(test)]
pub use post_store::MockPostStore;
pub use post_store::PostStore;
#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::{UserDirectory, UserProfileRequest};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
pub use visible_posts::VisiblePostsQuery;
