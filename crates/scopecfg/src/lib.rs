//! Scoped configuration resolver for the search client.
//!
//! [`ScopedConfigResolver`] reads named settings for one store scope from an
//! external [`ConfigStore`](scopecfg_types::config_store::ConfigStore),
//! memoizes them until the scope changes, and derives the typed decisions the
//! transport layer needs (authentication mode, protocol, channels, encodings).
//! Parameter tables and timeouts are compile-time constants in [`params`] and
//! [`timeouts`].

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod auth;
pub mod params;
pub mod prelude;
pub mod registry;
pub mod resolver;
pub mod snapshot;
pub mod timeouts;

pub use auth::AuthMode;
pub use params::ParamPolicy;
pub use resolver::{DEFAULT_CONFIG_ROOT, ResolverOpts, ScopedConfigResolver};
pub use snapshot::ConfigSnapshot;
pub use timeouts::{Operation, Timeouts};

pub use scopecfg_types as types;

// vim: ts=4
