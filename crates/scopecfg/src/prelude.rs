pub use scopecfg_types::prelude::*;

pub use crate::auth::AuthMode;
pub use crate::resolver::{ResolverOpts, ScopedConfigResolver};

// vim: ts=4
