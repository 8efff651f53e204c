//! User data model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Validation errors returned by the user constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// `name` was absent or empty.
    #[error("user name must not be empty")]
    EmptyName,
    /// `bio` was absent or empty.
    #[error("user bio must not be empty")]
    EmptyBio,
    /// An identifier could not be parsed as an integer.
    #[error("user id must be an integer")]
    InvalidId,
}

/// Persistence-assigned user identifier.
///
/// Serialised as a bare JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier issued by a repository.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw integer.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }
}

/// Validated `name`/`bio` pair used to create or replace a user.
///
/// ## Invariants
/// - `name` and `bio` are non-empty. Whitespace is preserved as supplied.
///
/// # Examples
/// ```
/// use users_api::domain::{UserDraft, UserValidationError};
///
/// let draft = UserDraft::try_new("Ada", "mathematician").expect("valid draft");
/// assert_eq!(draft.name(), "Ada");
///
/// assert_eq!(
///     UserDraft::try_new("", "mathematician"),
///     Err(UserValidationError::EmptyName)
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    name: String,
    bio: String,
}

impl UserDraft {
    /// Fallible constructor enforcing the presence of both fields.
    pub fn try_new(
        name: impl Into<String>,
        bio: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        let bio = bio.into();
        if bio.is_empty() {
            return Err(UserValidationError::EmptyBio);
        }
        Ok(Self { name, bio })
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Free-form biography.
    pub fn bio(&self) -> &str {
        self.bio.as_str()
    }
}

/// Application user.
///
/// ## Invariants
/// - `id` is assigned by the repository and never changes.
/// - `name` and `bio` are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    name: String,
    bio: String,
}

impl User {
    /// Attach a repository-issued identifier to a validated draft.
    pub fn new(id: UserId, draft: UserDraft) -> Self {
        let UserDraft { name, bio } = draft;
        Self { id, name, bio }
    }

    /// Fallible constructor from raw parts, as read back from storage.
    pub fn try_from_parts(
        id: i64,
        name: impl Into<String>,
        bio: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let draft = UserDraft::try_new(name, bio)?;
        Ok(Self::new(UserId::new(id), draft))
    }

    /// Stable identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Free-form biography.
    pub fn bio(&self) -> &str {
        self.bio.as_str()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserDto {
    id: i64,
    name: String,
    bio: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User { id, name, bio } = value;
        Self {
            id: id.as_i64(),
            name,
            bio,
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        User::try_from_parts(value.id, value.name, value.bio)
    }
}
