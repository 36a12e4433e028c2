//! Sign-in API handler.
//!
//! ```text
//! POST /sign-in 1
//! 200 {"id":1,"name":"hoon"}
//! ```

use actix_web::{post, web};
use tracing::debug;

use crate::domain::{User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;

/// Resolve a user identifier to its active user record.
///
/// The body is a bare JSON integer. An identifier with no active user answers
/// `200` with the empty sentinel (`id = -1`) rather than `404`.
#[utoipa::path(
    post,
    path = "/sign-in",
    request_body(
        content = i64,
        description = "User identifier as a bare JSON integer",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Resolved user", body = UserSchema),
        (status = 400, description = "Body is not a JSON integer", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "signIn"
)]
#[post("/sign-in")]
pub async fn sign_in(
    state: web::Data<HttpState>,
    payload: web::Json<i64>,
) -> ApiResult<web::Json<User>> {
    let id = UserId::new(payload.into_inner());
    let user = state.sign_in.sign_in(id).await?.into_user();
    if user.is_empty_sentinel() {
        debug!(user_id = %id, "no active user; answering with the empty sentinel");
    }
    Ok(web::Json(user))
}
