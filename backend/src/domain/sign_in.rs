//! Sign-in lookup use-case.
//!
//! [`SignInServiceImpl`] asks the user repository for an *active* user with
//! the requested identifier. Absence is reported as
//! [`SignInOutcome::NotFound`]; callers that need a record regardless fold it
//! into [`User::EMPTY`] with [`SignInOutcome::into_user`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use super::ports::{SignInService, UserPersistenceError, UserRepository};
use super::{Error, User, UserId};

/// Result of resolving an identifier to an active user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInOutcome {
    /// An active user matched the identifier.
    Found(User),
    /// No active user matched the identifier.
    NotFound,
}

impl SignInOutcome {
    /// Return the matched user, or [`User::EMPTY`] when nothing matched.
    ///
    /// # Examples
    /// ```
    /// use signin::domain::{SignInOutcome, User};
    ///
    /// assert_eq!(SignInOutcome::NotFound.into_user(), User::EMPTY);
    /// assert_eq!(SignInOutcome::Found(User::TEMP).into_user(), User::TEMP);
    /// ```
    #[must_use]
    pub fn into_user(self) -> User {
        match self {
            Self::Found(user) => user,
            Self::NotFound => User::EMPTY,
        }
    }

    /// Borrow the matched user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Found(user) => Some(user),
            Self::NotFound => None,
        }
    }

    /// Whether an active user matched.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl From<Option<User>> for SignInOutcome {
    fn from(value: Option<User>) -> Self {
        value.map_or(Self::NotFound, Self::Found)
    }
}

/// Concrete implementation of [`SignInService`] over a [`UserRepository`].
///
/// Holds no state besides the repository handle; every call is a single
/// repository lookup.
pub struct SignInServiceImpl<R> {
    users: Arc<R>,
}

impl<R> Clone for SignInServiceImpl<R> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
        }
    }
}

impl<R> SignInServiceImpl<R>
where
    R: UserRepository,
{
    /// Create a service backed by `users`.
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }

    fn map_persistence_error(id: UserId, err: &UserPersistenceError) -> Error {
        error!(user_id = %id, error = %err, "active user lookup failed");
        Error::internal(format!("failed to look up user {id}"))
    }
}

#[async_trait]
impl<R> SignInService for SignInServiceImpl<R>
where
    R: UserRepository,
{
    async fn sign_in(&self, id: UserId) -> Result<SignInOutcome, Error> {
        let found = self
            .users
            .find_active_by_id(id)
            .await
            .map_err(|err| Self::map_persistence_error(id, &err))?;
        let outcome = SignInOutcome::from(found);
        debug!(user_id = %id, found = outcome.is_found(), "resolved sign-in lookup");
        Ok(outcome)
    }
}
