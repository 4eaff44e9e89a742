//! Request validation producing field-level violations.
//!
//! Validators collect every violation instead of stopping at the first one so
//! clients can fix a whole form in one round trip. Services call them before
//! touching any repository.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::post::PostText;
use super::user::{Age, DisplayName, UserProfile};

/// A single constraint violation on an input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldViolation {
    /// Name of the offending field as the client sent it.
    #[schema(example = "name")]
    pub field: String,
    /// What is wrong with the value.
    #[schema(example = "name is required")]
    pub message: String,
}

impl FieldViolation {
    /// Build a violation for `field`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn required(field: &str) -> Self {
        Self::new(field, format!("{field} is required"))
    }
}

/// Validate a candidate user profile.
///
/// # Examples
/// ```
/// use social_backend::domain::validate_user_profile;
///
/// let violations = validate_user_profile(None, Some(0)).expect_err("invalid");
/// let fields: Vec<_> = violations.iter().map(|v| v.field.as_str()).collect();
/// assert_eq!(fields, ["name", "age"]);
/// ```
pub fn validate_user_profile(
    name: Option<&str>,
    age: Option<i64>,
) -> Result<UserProfile, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let display_name = match name {
        None => {
            violations.push(FieldViolation::required("name"));
            None
        }
        Some(raw) => match DisplayName::new(raw) {
            Ok(display_name) => Some(display_name),
            Err(err) => {
                violations.push(FieldViolation::new("name", err.to_string()));
                None
            }
        },
    };

    let age = match age {
        None => {
            violations.push(FieldViolation::required("age"));
            None
        }
        Some(raw) => match Age::new(raw) {
            Ok(age) => Some(age),
            Err(err) => {
                violations.push(FieldViolation::new("age", err.to_string()));
                None
            }
        },
    };

    match (display_name, age) {
        (Some(display_name), Some(age)) if violations.is_empty() => {
            Ok(UserProfile { display_name, age })
        }
        _ => Err(violations),
    }
}

/// Validate the text of a new post.
pub fn validate_post_text(text: Option<&str>) -> Result<PostText, Vec<FieldViolation>> {
    let raw = text.ok_or_else(|| vec![FieldViolation::required("text")])?;
    PostText::new(raw).map_err(|err| vec![FieldViolation::new("text", err.to_string())])
}
