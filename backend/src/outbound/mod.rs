//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: user storage adapters. Only an in-memory stub exists;
//!   it answers from canned records and never writes anywhere.
//!
//! Adapters are thin translators between domain types and the backing store.
//! They contain no business logic.

pub mod persistence;
