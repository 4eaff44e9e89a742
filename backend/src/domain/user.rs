//! User identity and profile.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Validation errors raised by the user value types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyId,
    InvalidId,
    EmptyDisplayName,
    DisplayNameTooLong { max: usize },
    DisplayNameControlCharacters,
    AgeNotPositive,
    AgeTooLarge { max: u32 },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
            Self::EmptyDisplayName => write!(f, "name must not be blank"),
            Self::DisplayNameTooLong { max } => {
                write!(f, "name must be at most {max} characters")
            }
            Self::DisplayNameControlCharacters => {
                write!(f, "name must not contain control characters")
            }
            Self::AgeNotPositive => write!(f, "age must be a positive integer"),
            Self::AgeTooLarge { max } => write!(f, "age must be at most {max}"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Opaque user identifier, assigned on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(Uuid);

impl UserId {
    /// Parse an identifier from its textual UUID form.
    ///
    /// # Examples
    /// ```
    /// use social_backend::domain::UserId;
    ///
    /// let id = UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
    /// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    /// assert!(UserId::new(" ").is_err());
    /// ```
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let raw = id.as_ref();
        if raw.trim().is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if raw.trim() != raw {
            return Err(UserValidationError::InvalidId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Generate a new random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID, typically one read back from storage.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for UserId {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Maximum number of characters in a display name.
pub const DISPLAY_NAME_MAX: usize = 100;

/// Name shown to other users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    /// Validate and construct a display name.
    pub fn new(display_name: impl Into<String>) -> Result<Self, UserValidationError> {
        let display_name = display_name.into();
        if display_name.trim().is_empty() {
            return Err(UserValidationError::EmptyDisplayName);
        }
        if display_name.chars().count() > DISPLAY_NAME_MAX {
            return Err(UserValidationError::DisplayNameTooLong {
                max: DISPLAY_NAME_MAX,
            });
        }
        if display_name.chars().any(char::is_control) {
            return Err(UserValidationError::DisplayNameControlCharacters);
        }
        Ok(Self(display_name))
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<DisplayName> for String {
    fn from(value: DisplayName) -> Self {
        value.0
    }
}

/// Upper bound accepted for [`Age`].
pub const AGE_MAX: u32 = 150;

/// Age in whole years; always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Age(u32);

impl Age {
    /// Validate a raw age value.
    ///
    /// Accepts a signed input so negative request values surface as
    /// validation failures instead of decoding errors.
    ///
    /// # Examples
    /// ```
    /// use social_backend::domain::Age;
    ///
    /// assert_eq!(Age::new(30).expect("valid").value(), 30);
    /// assert!(Age::new(0).is_err());
    /// assert!(Age::new(-4).is_err());
    /// ```
    pub fn new(age: i64) -> Result<Self, UserValidationError> {
        if age <= 0 {
            return Err(UserValidationError::AgeNotPositive);
        }
        u32::try_from(age)
            .ok()
            .filter(|value| *value <= AGE_MAX)
            .map(Self)
            .ok_or(UserValidationError::AgeTooLarge { max: AGE_MAX })
    }

    /// Age in years.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated mutable fields of a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub display_name: DisplayName,
    pub age: Age,
}

/// Application user.
///
/// ## Invariants
/// - `id` never changes after creation.
/// - `display_name` and `age` change together through [`User::with_profile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    display_name: DisplayName,
    age: Age,
    created_at: DateTime<Utc>,
}

impl User {
    /// Assemble a user from validated parts.
    pub fn new(id: UserId, profile: UserProfile, created_at: DateTime<Utc>) -> Self {
        let UserProfile { display_name, age } = profile;
        Self {
            id,
            display_name,
            age,
            created_at,
        }
    }

    /// Replace the mutable fields, keeping identity and creation time.
    #[must_use]
    pub fn with_profile(self, profile: UserProfile) -> Self {
        Self::new(self.id, profile, self.created_at)
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    pub fn age(&self) -> Age {
        self.age
    }

    /// When the user was created; defines listing order.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
