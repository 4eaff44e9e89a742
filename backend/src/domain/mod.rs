//! Domain primitives, aggregates and services.
//!
//! Purpose: define the follower graph and post visibility rules without any
//! transport or storage concerns. Adapters reach the services through the
//! traits in [`ports`].
//!
//! Public surface:
//! - User, Post, FollowerEdge: aggregates and their value types.
//! - SocialError: use-case failures; converts into the transport `Error`.
//! - UserDirectoryService, FollowerGraphService, PostStoreService,
//!   VisibilityAuthorizer: implementations of the driving ports.

pub mod error;
pub mod follower;
pub mod ports;
pub mod post;
pub mod social_error;
pub mod trace_id;
pub mod user;
pub mod validation;

mod follower_graph_service;
mod post_store_service;
mod user_directory_service;
mod visibility_service;

pub use self::error::{Error, ErrorCode};
pub use self::follower::{FollowerEdge, FollowerSummary, SelfFollowError};
pub use self::follower_graph_service::FollowerGraphService;
pub use self::post::{
    POST_TEXT_MAX, Post, PostId, PostText, PostValidationError, sort_newest_first,
};
pub use self::post_store_service::PostStoreService;
pub use self::social_error::SocialError;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    AGE_MAX, Age, DISPLAY_NAME_MAX, DisplayName, User, UserId, UserProfile, UserValidationError,
};
pub use self::user_directory_service::UserDirectoryService;
pub use self::validation::{FieldViolation, validate_post_text, validate_user_profile};
pub use self::visibility_service::{DenialReason, VisibilityAuthorizer, VisibilityState};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use social_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
