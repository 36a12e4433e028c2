//! User data model.
//!
//! A [`User`] pairs an optional numeric identifier with an optional display
//! name. Records are immutable once built and compare structurally.
//!
//! Two canned records exist: [`User::EMPTY`] marks a lookup that found nobody
//! and [`User::TEMP`] is the record every stub lookup resolves to.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Display name given to users that were not supplied one.
pub const DEFAULT_USER_NAME: &str = "hoon";

/// Numeric user identifier.
///
/// Any `i64` is accepted; the identifier is neither range-checked nor
/// validated for existence.
///
/// # Examples
/// ```
/// use signin::domain::UserId;
///
/// let id = UserId::new(42);
/// assert_eq!(id.get(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Return the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Human readable display name.
///
/// Defaults to [`DEFAULT_USER_NAME`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserName(Cow<'static, str>);

impl UserName {
    /// The placeholder name given to users without one.
    pub const DEFAULT: Self = Self(Cow::Borrowed(DEFAULT_USER_NAME));

    /// Construct a display name from owned or borrowed input.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// Borrow the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for UserName {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for UserName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for UserName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

fn default_name() -> Option<UserName> {
    Some(UserName::DEFAULT)
}

/// Application user.
///
/// ## Invariants
/// - Equality is by value: two users with the same id and name are equal.
/// - Both fields are always present in the JSON form, as `null` when unset.
///   A missing `name` key deserialises to [`DEFAULT_USER_NAME`].
///
/// # Examples
/// ```
/// use signin::domain::{User, UserId};
///
/// let user = User::new(UserId::new(1));
/// assert_eq!(user, User::TEMP);
/// assert_eq!(
///     serde_json::to_string(&user).unwrap(),
///     r#"{"id":1,"name":"hoon"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    id: Option<UserId>,
    #[serde(default = "default_name")]
    name: Option<UserName>,
}

impl User {
    /// Sentinel returned when no active user matches an identifier.
    pub const EMPTY: Self = Self {
        id: Some(UserId::new(-1)),
        name: Some(UserName::DEFAULT),
    };

    /// Canned record served by the stub repository.
    pub const TEMP: Self = Self {
        id: Some(UserId::new(1)),
        name: Some(UserName::DEFAULT),
    };

    /// Build a user with the given identifier and the default name.
    #[must_use]
    pub const fn new(id: UserId) -> Self {
        Self {
            id: Some(id),
            name: Some(UserName::DEFAULT),
        }
    }

    /// Build a user from explicit, possibly absent, parts.
    #[must_use]
    pub fn from_parts(id: Option<UserId>, name: Option<UserName>) -> Self {
        Self { id, name }
    }

    /// Replace the display name.
    #[must_use]
    pub fn with_name(self, name: impl Into<UserName>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    /// Identifier, if the record carries one.
    #[must_use]
    pub const fn id(&self) -> Option<UserId> {
        self.id
    }

    /// Display name, if the record carries one.
    #[must_use]
    pub fn name(&self) -> Option<&UserName> {
        self.name.as_ref()
    }

    /// Whether this record is the [`User::EMPTY`] sentinel.
    #[must_use]
    pub fn is_empty_sentinel(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: None,
            name: Some(UserName::DEFAULT),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.id.map_or_else(|| "null".to_owned(), |id| id.to_string());
        let name = self.name.as_ref().map_or("null", UserName::as_str);
        write!(f, "User(id={id}, name={name})")
    }
}
