//! Recording repository double for sign-in integration suites.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use signin::domain::ports::{UserPersistenceError, UserRepository};
use signin::domain::{User, UserId};

/// In-memory [`UserRepository`] that records every active lookup.
#[derive(Clone, Default)]
pub(crate) struct RecordingUserRepository {
    active: Arc<Mutex<Vec<User>>>,
    failure: Option<UserPersistenceError>,
    calls: Arc<Mutex<Vec<UserId>>>,
}

impl RecordingUserRepository {
    /// Repository holding `users` as active records.
    pub(crate) fn with_active(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            active: Arc::new(Mutex::new(users.into_iter().collect())),
            ..Self::default()
        }
    }

    /// Repository whose active lookups always fail.
    pub(crate) fn failing(error: UserPersistenceError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Identifiers passed to `find_active_by_id`, in call order.
    pub(crate) fn calls(&self) -> Vec<UserId> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn lookup(&self, id: UserId) -> Option<User> {
        self.active
            .lock()
            .expect("users lock")
            .iter()
            .find(|user| user.id() == Some(id))
            .cloned()
    }
}

#[async_trait]
impl UserRepository for RecordingUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.lookup(id))
    }

    async fn find_active_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        self.calls.lock().expect("calls lock").push(id);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(self.lookup(id)),
        }
    }

    async fn save(&self, user: User) -> Result<User, UserPersistenceError> {
        self.active.lock().expect("users lock").push(user.clone());
        Ok(user)
    }
}
