//! Store doubles and helpers shared by the resolver tests

#![allow(dead_code)]

use parking_lot::Mutex;
use std::collections::HashMap;
use std::io::Write;
use std::sync::{Arc, OnceLock, Weak};

use scopecfg::ScopedConfigResolver;
use scopecfg::types::prelude::*;

/// Initialize a tracing subscriber that writes through the test harness
pub fn setup_test_logging() {
	let _ = tracing_subscriber::fmt()
		.with_test_writer()
		.with_max_level(tracing::Level::DEBUG)
		.try_init();
}

/// Log output collected by a subscriber installed with [`CapturedLogs::capture`]
#[derive(Clone, Debug, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl Write for CapturedLogs {
	fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
		self.0.lock().extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> std::io::Result<()> {
		Ok(())
	}
}

impl CapturedLogs {
	/// Run `f` with a DEBUG subscriber writing into the returned buffer
	pub fn capture(f: impl FnOnce()) -> Self {
		let logs = Self::default();
		let writer = logs.clone();
		let subscriber = tracing_subscriber::fmt()
			.with_writer(move || writer.clone())
			.with_max_level(tracing::Level::DEBUG)
			.with_ansi(false)
			.finish();
		tracing::subscriber::with_default(subscriber, f);
		logs
	}

	pub fn contents(&self) -> String {
		String::from_utf8_lossy(&self.0.lock()).into_owned()
	}
}

/// Map-backed store that counts every lookup per (scope, path)
#[derive(Debug, Default)]
pub struct CountingStore {
	values: Mutex<HashMap<(ScopeId, String), SettingValue>>,
	calls: Mutex<HashMap<(ScopeId, String), usize>>,
}

impl CountingStore {
	pub fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	/// Set `name` (below the default root) for `scope`
	pub fn set(&self, scope: ScopeId, name: &str, value: impl Into<SettingValue>) {
		self.values.lock().insert((scope, format!("factfinder/search/{}", name)), value.into());
	}

	/// Lookups made for `name` in `scope`
	pub fn calls(&self, scope: ScopeId, name: &str) -> usize {
		self.calls
			.lock()
			.get(&(scope, format!("factfinder/search/{}", name)))
			.copied()
			.unwrap_or(0)
	}

	pub fn total_calls(&self) -> usize {
		self.calls.lock().values().sum()
	}
}

impl ConfigStore for CountingStore {
	fn get_value(&self, scope: ScopeId, path: &str) -> CfgResult<Option<SettingValue>> {
		let key = (scope, path.to_string());
		*self.calls.lock().entry(key.clone()).or_insert(0) += 1;
		Ok(self.values.lock().get(&key).cloned())
	}
}

/// Store that fails every lookup
#[derive(Debug, Default)]
pub struct FailingStore {
	calls: Mutex<usize>,
}

impl FailingStore {
	pub fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub fn calls(&self) -> usize {
		*self.calls.lock()
	}
}

impl ConfigStore for FailingStore {
	fn get_value(&self, _scope: ScopeId, path: &str) -> CfgResult<Option<SettingValue>> {
		*self.calls.lock() += 1;
		Err(Error::Unavailable(format!("connection refused while reading {}", path)))
	}
}

/// Store that binds its resolver to `next_scope` from inside the first lookup,
/// then answers every lookup with the value configured for the queried scope
#[derive(Debug)]
pub struct RebindingStore {
	values: HashMap<ScopeId, SettingValue>,
	next_scope: ScopeId,
	resolver: OnceLock<Weak<ScopedConfigResolver>>,
	queried: Mutex<Vec<ScopeId>>,
}

impl RebindingStore {
	pub fn new(values: &[(ScopeId, &str)], next_scope: ScopeId) -> Arc<Self> {
		Arc::new(Self {
			values: values.iter().map(|(scope, v)| (*scope, SettingValue::from(*v))).collect(),
			next_scope,
			resolver: OnceLock::new(),
			queried: Mutex::new(Vec::new()),
		})
	}

	/// Create a resolver wired to this store
	pub fn resolver(self: &Arc<Self>) -> Arc<ScopedConfigResolver> {
		let resolver = Arc::new(ScopedConfigResolver::new(self.clone()));
		let _ = self.resolver.set(Arc::downgrade(&resolver));
		resolver
	}

	/// Scopes the store was queried for, in order
	pub fn queried(&self) -> Vec<ScopeId> {
		self.queried.lock().clone()
	}
}

impl ConfigStore for RebindingStore {
	fn get_value(&self, scope: ScopeId, _path: &str) -> CfgResult<Option<SettingValue>> {
		let first = {
			let mut queried = self.queried.lock();
			queried.push(scope);
			queried.len() == 1
		};
		if first {
			if let Some(resolver) = self.resolver.get().and_then(Weak::upgrade) {
				resolver.bind_scope(self.next_scope);
			}
		}
		Ok(self.values.get(&scope).cloned())
	}
}

// vim: ts=4
