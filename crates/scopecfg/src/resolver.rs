//! Scoped configuration resolver with lazy, memoized lookups
//!
//! Raw values are fetched from the [`ConfigStore`] on first access and kept
//! until a different scope is bound. Lookup failures never reach the caller:
//! they are logged and cached as absent values, and every derived accessor
//! falls back to a neutral default.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::auth::AuthMode;
use crate::params::{self, ParamPolicy};
use crate::prelude::*;
use crate::registry::{self, keys};
use crate::snapshot::ConfigSnapshot;
use crate::timeouts::{Operation, Timeouts};

/// Configuration namespace of the search client inside the host's config tree
pub const DEFAULT_CONFIG_ROOT: &str = "factfinder/search";

/// Resolver construction options
#[derive(Debug, Clone)]
pub struct ResolverOpts {
	/// Prefix joined with "/" in front of every setting name
	pub root: Box<str>,
	/// Scope in effect until `bind_scope` is called
	pub default_scope: ScopeId,
}

impl Default for ResolverOpts {
	fn default() -> Self {
		Self { root: DEFAULT_CONFIG_ROOT.into(), default_scope: ScopeId::DEFAULT }
	}
}

impl ResolverOpts {
	pub fn root(mut self, root: impl Into<Box<str>>) -> Self {
		self.root = root.into();
		self
	}

	pub fn default_scope(mut self, scope: ScopeId) -> Self {
		self.default_scope = scope;
		self
	}
}

/// Everything cached for the currently bound scope. Dropped as a whole on
/// scope change.
#[derive(Debug, Default)]
struct ScopeCache {
	/// Queried settings. `None` records an absent value or a failed lookup.
	values: HashMap<Box<str>, Option<SettingValue>>,
	auth_mode: Option<AuthMode>,
	secondary_channels: Option<Arc<[Box<str>]>>,
}

#[derive(Debug)]
struct ResolverState {
	scope: ScopeId,
	cache: ScopeCache,
}

/// Read-only view of the search client configuration for one scope at a time
///
/// Owned by a single request or session. Accessors take `&self`; the internal
/// lock is never held while the store is queried.
#[derive(Debug)]
pub struct ScopedConfigResolver {
	store: Arc<dyn ConfigStore>,
	root: Box<str>,
	state: RwLock<ResolverState>,
	ids_only: AtomicBool,
}

impl ScopedConfigResolver {
	pub fn new(store: Arc<dyn ConfigStore>) -> Self {
		Self::with_opts(store, ResolverOpts::default())
	}

	pub fn with_opts(store: Arc<dyn ConfigStore>, opts: ResolverOpts) -> Self {
		Self {
			store,
			root: opts.root,
			state: RwLock::new(ResolverState {
				scope: opts.default_scope,
				cache: ScopeCache::default(),
			}),
			ids_only: AtomicBool::new(true),
		}
	}

	/// Rebuild a resolver from a snapshot. Keys captured in the snapshot are
	/// answered from it without touching the store.
	pub fn from_snapshot(
		store: Arc<dyn ConfigStore>,
		opts: ResolverOpts,
		snapshot: ConfigSnapshot,
	) -> Self {
		info!(
			"Restoring config snapshot for scope {} with {} values",
			snapshot.scope,
			snapshot.values.len()
		);
		let values = snapshot.values.into_iter().map(|(k, v)| (k.into_boxed_str(), v)).collect();
		let resolver = Self::with_opts(store, opts);
		*resolver.state.write() = ResolverState {
			scope: snapshot.scope,
			cache: ScopeCache { values, ..ScopeCache::default() },
		};
		resolver.set_ids_only(snapshot.ids_only);
		resolver
	}

	/// Currently bound scope
	pub fn scope(&self) -> ScopeId {
		self.state.read().scope
	}

	/// Bind the resolver to `scope`. Switching to a different scope discards
	/// every cached value; binding the current scope again keeps them.
	pub fn bind_scope(&self, scope: ScopeId) -> &Self {
		let mut state = self.state.write();
		if state.scope != scope {
			debug!(
				"Config scope changed {} -> {}, dropping {} cached values",
				state.scope,
				scope,
				state.cache.values.len()
			);
			state.cache = ScopeCache::default();
		}
		state.scope = scope;
		self
	}

	/// Raw value of `name` (relative to the configuration root) in the bound scope
	pub fn get(&self, name: &str) -> Option<SettingValue> {
		let scope = {
			let state = self.state.read();
			if let Some(value) = state.cache.values.get(name) {
				return value.clone();
			}
			state.scope
		};

		let path = format!("{}/{}", self.root, name);
		let value = match self.store.get_value(scope, &path) {
			Ok(value) => {
				debug!(
					"Config cache miss: {}.{} -> {}",
					scope,
					path,
					value.as_ref().map_or("none", SettingValue::type_name)
				);
				value
			}
			Err(err) => {
				warn!("Config lookup failed for {}.{}, treating as absent: {}", scope, path, err);
				None
			}
		};

		let mut state = self.state.write();
		if state.scope != scope {
			// rebound while the store was queried
			return value;
		}
		state.cache.values.entry(name.into()).or_insert(value).clone()
	}

	fn get_string(&self, name: &str) -> Box<str> {
		self.get(name).map(|v| v.as_str().into()).unwrap_or_default()
	}

	/// Raw values cached so far for the bound scope, sorted by key
	pub(crate) fn cached_values(&self) -> (ScopeId, Vec<(Box<str>, Option<SettingValue>)>) {
		let state = self.state.read();
		let mut values: Vec<_> =
			state.cache.values.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
		values.sort_by(|a, b| a.0.cmp(&b.0));
		(state.scope, values)
	}

	/// Capture every registered setting of the bound scope
	pub fn snapshot(&self) -> ConfigSnapshot {
		for key in registry::keys() {
			self.get(key);
		}
		ConfigSnapshot::capture(self)
	}

	// Flags //
	//*******//
	/// Debug output is enabled only by the literal string "true"
	pub fn is_debug_enabled(&self) -> bool {
		matches!(self.get(keys::DEBUG), Some(SettingValue::String(s)) if &*s == "true")
	}

	/// Whether search adapters request product ids only (otherwise full records)
	///
	/// Independent of the bound scope.
	pub fn ids_only(&self) -> bool {
		self.ids_only.load(Ordering::Relaxed)
	}

	pub fn set_ids_only(&self, ids_only: bool) {
		self.ids_only.store(ids_only, Ordering::Relaxed);
	}

	// Connection //
	//************//
	/// Request protocol, falling back to the legacy `protokoll` key when
	/// `protocol` is unset or falsy
	pub fn request_protocol(&self) -> Box<str> {
		self.get(keys::PROTOCOL)
			.filter(SettingValue::is_truthy)
			.or_else(|| self.get(keys::PROTOCOL_LEGACY))
			.map(|v| v.as_str().into())
			.unwrap_or_default()
	}

	pub fn server_address(&self) -> Box<str> {
		self.get_string(keys::ADDRESS)
	}

	/// Server port; `None` when unset or not a valid port number
	pub fn server_port(&self) -> Option<u16> {
		self.get(keys::PORT).and_then(|v| v.as_int()).and_then(|port| u16::try_from(port).ok())
	}

	pub fn context(&self) -> Box<str> {
		self.get_string(keys::CONTEXT)
	}

	pub fn channel(&self) -> Box<str> {
		self.get_string(keys::CHANNEL)
	}

	/// Additional channels from the `;`-separated list, empty entries removed
	pub fn secondary_channels(&self) -> Arc<[Box<str>]> {
		let scope = {
			let state = self.state.read();
			if let Some(channels) = &state.cache.secondary_channels {
				return channels.clone();
			}
			state.scope
		};

		let raw = self.get_string(keys::SECONDARY_CHANNELS);
		let channels: Arc<[Box<str>]> =
			raw.split(';').filter(|channel| !channel.is_empty()).map(Into::into).collect();

		let mut state = self.state.write();
		if state.scope == scope {
			state.cache.secondary_channels = Some(channels.clone());
		}
		channels
	}

	pub fn language(&self) -> Box<str> {
		self.get_string(keys::LANGUAGE)
	}

	// Authentication //
	//****************//
	pub fn auth_mode(&self) -> AuthMode {
		let scope = {
			let state = self.state.read();
			if let Some(mode) = state.cache.auth_mode {
				return mode;
			}
			state.scope
		};

		let mode = AuthMode::from_setting(self.get(keys::AUTH_TYPE).as_ref());

		let mut state = self.state.write();
		if state.scope == scope {
			state.cache.auth_mode = Some(mode);
		}
		mode
	}

	pub fn is_http_auth(&self) -> bool {
		self.auth_mode() == AuthMode::Http
	}

	pub fn is_simple_auth(&self) -> bool {
		self.auth_mode() == AuthMode::Simple
	}

	pub fn is_advanced_auth(&self) -> bool {
		self.auth_mode() == AuthMode::Advanced
	}

	pub fn user_name(&self) -> Box<str> {
		self.get_string(keys::AUTH_USER)
	}

	pub fn password(&self) -> Box<str> {
		self.get_string(keys::AUTH_PASSWORD)
	}

	pub fn authentication_prefix(&self) -> Box<str> {
		self.get_string(keys::AUTH_PREFIX)
	}

	pub fn authentication_postfix(&self) -> Box<str> {
		self.get_string(keys::AUTH_POSTFIX)
	}

	// Encoding //
	//**********//
	pub fn client_url_encoding(&self) -> Box<str> {
		self.get_string(keys::ENCODING_PAGE_URI)
	}

	pub fn page_content_encoding(&self) -> Box<str> {
		self.get_string(keys::ENCODING_PAGE_CONTENT)
	}

	// Parameter tables //
	//******************//
	pub fn client_params(&self) -> ParamPolicy {
		ParamPolicy::CLIENT
	}

	pub fn server_params(&self) -> ParamPolicy {
		ParamPolicy::SERVER
	}

	pub fn client_mappings(&self) -> &'static [(&'static str, &'static str)] {
		params::CLIENT_MAPPINGS
	}

	pub fn server_mappings(&self) -> &'static [(&'static str, &'static str)] {
		params::SERVER_MAPPINGS
	}

	pub fn ignored_client_parameters(&self) -> &'static [&'static str] {
		params::IGNORED_CLIENT_PARAMETERS
	}

	pub fn ignored_server_parameters(&self) -> &'static [&'static str] {
		params::IGNORED_SERVER_PARAMETERS
	}

	pub fn required_client_parameters(&self) -> &'static [&'static str] {
		params::REQUIRED_CLIENT_PARAMETERS
	}

	pub fn required_server_parameters(&self) -> &'static [&'static str] {
		params::REQUIRED_SERVER_PARAMETERS
	}

	pub fn whitelist_client_parameters(&self) -> &'static [&'static str] {
		params::WHITELIST_CLIENT_PARAMETERS
	}

	pub fn whitelist_server_parameters(&self) -> &'static [&'static str] {
		params::WHITELIST_SERVER_PARAMETERS
	}

	// Timeouts //
	//**********//
	pub fn timeouts(&self, op: Operation) -> Timeouts {
		op.timeouts()
	}

	pub fn default_connect_timeout(&self) -> u64 {
		Timeouts::DEFAULT.connect_secs
	}

	pub fn default_timeout(&self) -> u64 {
		Timeouts::DEFAULT.read_secs
	}

	pub fn suggest_connect_timeout(&self) -> u64 {
		Timeouts::SUGGEST.connect_secs
	}

	pub fn suggest_timeout(&self) -> u64 {
		Timeouts::SUGGEST.read_secs
	}

	pub fn tracking_connect_timeout(&self) -> u64 {
		Timeouts::TRACKING.connect_secs
	}

	pub fn tracking_timeout(&self) -> u64 {
		Timeouts::TRACKING.read_secs
	}

	pub fn import_connect_timeout(&self) -> u64 {
		Timeouts::IMPORT.connect_secs
	}

	pub fn import_timeout(&self) -> u64 {
		Timeouts::IMPORT.read_secs
	}
}


// vim: ts=4
