//! Posts authored by users.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::user::UserId;

/// Maximum number of characters in a post.
pub const POST_TEXT_MAX: usize = 1000;

/// Validation errors raised by [`PostText::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostValidationError {
    EmptyText,
    TextTooLong { max: usize },
}

impl fmt::Display for PostValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyText => write!(f, "text must not be blank"),
            Self::TextTooLong { max } => write!(f, "text must be at most {max} characters"),
        }
    }
}

impl std::error::Error for PostValidationError {}

/// Free-text body of a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostText(String);

impl PostText {
    /// Validate and construct post text.
    pub fn new(text: impl Into<String>) -> Result<Self, PostValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(PostValidationError::EmptyText);
        }
        if text.chars().count() > POST_TEXT_MAX {
            return Err(PostValidationError::TextTooLong { max: POST_TEXT_MAX });
        }
        Ok(Self(text))
    }
}

impl AsRef<str> for PostText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<PostText> for String {
    fn from(value: PostText) -> Self {
        value.0
    }
}

/// Stable post identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(Uuid);

impl PostId {
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A post and its server-assigned creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    id: PostId,
    author_id: UserId,
    text: PostText,
    created_at: DateTime<Utc>,
}

impl Post {
    /// Assemble a post from already validated parts.
    pub fn new(id: PostId, author_id: UserId, text: PostText, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            author_id,
            text,
            created_at,
        }
    }

    /// Post identifier.
    pub fn id(&self) -> &PostId {
        &self.id
    }

    /// User who wrote the post.
    pub fn author_id(&self) -> &UserId {
        &self.author_id
    }

    /// Post body.
    pub fn text(&self) -> &PostText {
        &self.text
    }

    /// Server time at which the post was accepted.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Order posts newest first.
///
/// The sort is stable, so posts sharing a timestamp keep their relative input
/// order.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
