//! Failures returned by the social graph use cases.

use serde_json::json;
use tracing::error;

use super::ports::{FollowerPersistenceError, PostPersistenceError, UserPersistenceError};
use super::user::UserId;
use super::validation::FieldViolation;
use super::Error;

/// Outcome of a rejected social graph operation.
///
/// Every variant is terminal; callers never retry them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SocialError {
    #[error("user {0} not found")]
    UserNotFound(UserId),
    #[error("You can't follow yourself")]
    SelfFollow,
    #[error("You forgot the header followerId")]
    MissingFollowerId,
    #[error("Inexistent followerId")]
    UnknownFollowerId,
    #[error("You can't see these posts")]
    NotAFollower,
    #[error("Validation Error")]
    InvalidInput(Vec<FieldViolation>),
    #[error("{message}")]
    Unavailable { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl SocialError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<UserPersistenceError> for SocialError {
    fn from(err: UserPersistenceError) -> Self {
        error!(error = %err, "user repository failure");
        match err {
            UserPersistenceError::Connection { message } => {
                Self::unavailable(format!("user repository unavailable: {message}"))
            }
            UserPersistenceError::Query { message } => {
                Self::internal(format!("user repository error: {message}"))
            }
        }
    }
}

impl From<FollowerPersistenceError> for SocialError {
    fn from(err: FollowerPersistenceError) -> Self {
        error!(error = %err, "follower repository failure");
        match err {
            FollowerPersistenceError::Connection { message } => {
                Self::unavailable(format!("follower repository unavailable: {message}"))
            }
            FollowerPersistenceError::Query { message } => {
                Self::internal(format!("follower repository error: {message}"))
            }
            FollowerPersistenceError::MissingEndpoint => {
                Self::internal("follower edge references a missing user")
            }
        }
    }
}

impl From<PostPersistenceError> for SocialError {
    fn from(err: PostPersistenceError) -> Self {
        error!(error = %err, "post repository failure");
        match err {
            PostPersistenceError::Connection { message } => {
                Self::unavailable(format!("post repository unavailable: {message}"))
            }
            PostPersistenceError::Query { message } => {
                Self::internal(format!("post repository error: {message}"))
            }
            PostPersistenceError::MissingAuthor => Self::internal("post author does not exist"),
        }
    }
}

impl From<SocialError> for Error {
    fn from(err: SocialError) -> Self {
        let message = err.to_string();
        match err {
            SocialError::UserNotFound(id) => {
                Error::not_found(message).with_details(json!({ "userId": id.to_string() }))
            }
            SocialError::SelfFollow => Error::conflict(message),
            SocialError::MissingFollowerId => Error::invalid_request(message)
                .with_details(json!({ "code": "missing_follower_id" })),
            SocialError::UnknownFollowerId => Error::invalid_request(message)
                .with_details(json!({ "code": "unknown_follower_id" })),
            SocialError::NotAFollower => Error::forbidden(message),
            SocialError::InvalidInput(violations) => {
                Error::validation_failed(message).with_details(json!({ "errors": violations }))
            }
            SocialError::Unavailable { .. } => Error::service_unavailable(message),
            SocialError::Internal { .. } => Error::internal(message),
        }
    }
}
