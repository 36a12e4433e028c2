//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and stay testable without wiring a repository.

use std::sync::Arc;

use crate::domain::ports::SignInService;

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use signin::domain::ports::FixtureSignInService;
/// use signin::inbound::http::state::HttpState;
///
/// let state = HttpState::new(Arc::new(FixtureSignInService));
/// let _sign_in = state.sign_in.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    /// Sign-in lookup use-case.
    pub sign_in: Arc<dyn SignInService>,
}

impl HttpState {
    /// Construct state from the sign-in port.
    pub fn new(sign_in: Arc<dyn SignInService>) -> Self {
        Self { sign_in }
    }
}
