//! Shared types, the store adapter trait, and error types for scopecfg.
//!
//! The resolver crate and every store adapter depend on this crate, so
//! adapters can be built without pulling in the resolver itself.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod config_store;
pub mod error;
pub mod prelude;
pub mod types;
pub mod value;

// vim: ts=4
