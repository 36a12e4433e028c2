//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::ports::SignInService;
use crate::inbound::http::json_config;
use crate::inbound::http::sign_in::sign_in;
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;

/// Build an app exposing `POST /sign-in` over the given port implementation.
///
/// Mirrors the production wiring for the sign-in route: JSON error mapping
/// and the trace middleware are installed.
pub fn sign_in_app(
    port: Arc<dyn SignInService>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::new(port)))
        .app_data(json_config())
        .wrap(Trace)
        .service(sign_in)
}
