//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod sign_in_service;
mod user_repository;

#[cfg(test)]
pub use sign_in_service::MockSignInService;
pub use sign_in_service::{FixtureSignInService, SignInService};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
