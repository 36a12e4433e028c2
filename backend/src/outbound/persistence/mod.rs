//! User persistence adapters.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use signin::domain::SignInServiceImpl;
//! use signin::outbound::persistence::StubUserRepository;
//!
//! let service = SignInServiceImpl::new(Arc::new(StubUserRepository));
//! # let _ = service;
//! ```

mod stub_user_repository;

pub use stub_user_repository::StubUserRepository;
