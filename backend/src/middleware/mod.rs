//! Request middleware.
//!
//! Purpose: cross-cutting request lifecycle concerns. [`Trace`] scopes a
//! correlation identifier per request; [`ForceUtf8`] pins the response
//! charset.

pub mod charset;
pub mod trace;

pub use charset::ForceUtf8;
pub use trace::Trace;
