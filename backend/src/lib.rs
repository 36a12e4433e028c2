//! Sign-in backend library.
//!
//! Hexagonal layout: [`domain`] holds the user model, the sign-in use-case,
//! and its ports; [`outbound`] implements the storage port; [`inbound`]
//! exposes the use-case over HTTP.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
