//! Adapter trait for the external hierarchical configuration store
//!
//! The host application owns the configuration data. The resolver only ever
//! reads through this trait, one fully qualified path at a time.

use std::fmt::Debug;
use std::sync::Arc;

use crate::prelude::*;

pub trait ConfigStore: Debug + Send + Sync {
	/// Read the value at `path` (`<root>/<name>`) as seen from `scope`.
	///
	/// `Ok(None)` means the path exists but holds nothing usable, or does not
	/// exist at all. Errors are reserved for failures of the store itself.
	fn get_value(&self, scope: ScopeId, path: &str) -> CfgResult<Option<SettingValue>>;
}

impl<T: ConfigStore + ?Sized> ConfigStore for Arc<T> {
	fn get_value(&self, scope: ScopeId, path: &str) -> CfgResult<Option<SettingValue>> {
		(**self).get_value(scope, path)
	}
}

impl<T: ConfigStore + ?Sized> ConfigStore for Box<T> {
	fn get_value(&self, scope: ScopeId, path: &str) -> CfgResult<Option<SettingValue>> {
		(**self).get_value(scope, path)
	}
}

// vim: ts=4
