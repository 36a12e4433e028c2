//! In-memory stand-in for a user store.
//!
//! The stub ignores identifiers entirely. Its two lookups disagree on every
//! input: `find_by_id` never finds anyone while `find_active_by_id` always
//! finds [`User::TEMP`]. `save` echoes its argument back without storing it.

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserId};

/// Stateless stub implementation of [`UserRepository`].
#[derive(Debug, Default, Clone, Copy)]
pub struct StubUserRepository;

#[async_trait]
impl UserRepository for StubUserRepository {
    async fn find_by_id(&self, _id: UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(None)
    }

    async fn find_active_by_id(&self, _id: UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(Some(User::TEMP))
    }

    async fn save(&self, user: User) -> Result<User, UserPersistenceError> {
        info!(user = %user, "save");
        Ok(user)
    }
}
