//! Driven port for user storage adapters and their errors.
//!
//! The two lookups deliberately differ: `find_by_id` considers every stored
//! record while `find_active_by_id` only considers records eligible to sign
//! in. Adapters decide what "active" means.

use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Storage abstraction for [`User`] records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch any user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch a user by identifier, considering active users only.
    async fn find_active_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Store a user record and return the stored form.
    async fn save(&self, user: User) -> Result<User, UserPersistenceError>;
}
