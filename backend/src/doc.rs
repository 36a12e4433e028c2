//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the sign-in endpoint, the health probes, and the
//! schema wrappers from [`crate::inbound::http::schemas`]. Debug builds serve
//! it through Swagger UI; `cargo run --bin openapi-dump` prints it as JSON.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, UserSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sign-in backend API",
        description = "Resolves numeric user identifiers to user records.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::sign_in::sign_in,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserSchema, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
