//! Domain primitives, ports, and the sign-in use-case.
//!
//! Purpose: hold the transport-agnostic core. Types here never depend on
//! Actix; inbound adapters translate them to HTTP at the edge.
//!
//! Public surface:
//! - Error (alias to `error::Error`): domain error payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - User, UserId, UserName (from `user`): the user record and its parts.
//! - SignInOutcome, SignInServiceImpl (from `sign_in`): the lookup use-case.
//! - TraceId (from `trace_id`): request correlation identifier.

pub mod error;
pub mod ports;
pub mod sign_in;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::sign_in::{SignInOutcome, SignInServiceImpl};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{DEFAULT_USER_NAME, User, UserId, UserName};
