//! Driving port for the sign-in lookup use-case.
//!
//! Inbound adapters call this port to resolve an identifier into a user
//! without importing the repository wiring, so handler tests can swap in a
//! double.

use async_trait::async_trait;

use crate::domain::{Error, SignInOutcome, User, UserId};

/// Domain use-case port for signing in by identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignInService: Send + Sync {
    /// Resolve `id` to an active user, reporting absence explicitly.
    async fn sign_in(&self, id: UserId) -> Result<SignInOutcome, Error>;
}

/// Fixture implementation that treats every identifier as the canned user.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSignInService;

#[async_trait]
impl SignInService for FixtureSignInService {
    async fn sign_in(&self, _id: UserId) -> Result<SignInOutcome, Error> {
        Ok(SignInOutcome::Found(User::TEMP))
    }
}
