//! Tree-backed configuration store
//!
//! Holds the host configuration as a JSON tree per scope. Paths are
//! `/`-separated and walk nested objects, so `factfinder/search/encoding/pageURI`
//! reads `{"factfinder": {"search": {"encoding": {"pageURI": ...}}}}`.
//!
//! A value set for a specific scope overrides the default tree; anything the
//! scope does not set is read from the default tree.
//!
//! Documents look like this (scope keys are quoted):
//! ```yaml
//! default:
//!   factfinder:
//!     search:
//!       protocol: https
//! stores:
//!   "1":
//!     factfinder:
//!       search:
//!         channel: de
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

use parking_lot::RwLock;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use scopecfg_types::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TreeDocument {
	#[serde(default)]
	default: Value,
	#[serde(default)]
	stores: BTreeMap<String, Value>,
}

#[derive(Debug, Default)]
struct TreeData {
	default: Value,
	scopes: HashMap<ScopeId, Value>,
}

#[derive(Debug, Default)]
pub struct TreeStore {
	data: RwLock<TreeData>,
}

/// Walk `path` through nested objects
fn lookup<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
	path.split('/')
		.filter(|segment| !segment.is_empty())
		.try_fold(tree, |node, segment| node.as_object()?.get(segment))
}

/// Insert `value` at `path`, replacing non-object nodes on the way
fn insert(tree: &mut Value, path: &str, value: Value) {
	let mut node = tree;
	for segment in path.split('/').filter(|segment| !segment.is_empty()) {
		if !node.is_object() {
			*node = Value::Object(Map::new());
		}
		let Some(map) = node.as_object_mut() else { return };
		node = map.entry(segment).or_insert(Value::Null);
	}
	*node = value;
}

impl TreeStore {
	pub fn new() -> Self {
		Self::default()
	}

	fn from_document(doc: TreeDocument) -> CfgResult<Self> {
		let mut scopes = HashMap::with_capacity(doc.stores.len());
		for (key, tree) in doc.stores {
			let scope: ScopeId = key
				.parse()
				.map_err(|_| Error::Parse(format!("invalid store id in config: {:?}", key)))?;
			scopes.insert(scope, tree);
		}
		debug!("Loaded config tree with {} store overrides", scopes.len());
		Ok(Self { data: RwLock::new(TreeData { default: doc.default, scopes }) })
	}

	pub fn from_yaml_str(yaml: &str) -> CfgResult<Self> {
		Self::from_document(serde_yaml::from_str(yaml)?)
	}

	pub fn from_json_str(json: &str) -> CfgResult<Self> {
		Self::from_document(serde_json::from_str(json)?)
	}

	/// Load a document from disk. `.json` files are parsed as JSON, anything
	/// else as YAML.
	pub fn from_file(path: &Path) -> CfgResult<Self> {
		let content = std::fs::read_to_string(path)?;
		info!("Loading config tree from {}", path.display());
		match path.extension().and_then(|ext| ext.to_str()) {
			Some("json") => Self::from_json_str(&content),
			_ => Self::from_yaml_str(&content),
		}
	}

	/// Set a value in the default tree (`scope` = `None`) or as an override
	/// for one scope
	pub fn set(&self, scope: Option<ScopeId>, path: &str, value: impl Into<Value>) {
		let mut data = self.data.write();
		let tree = match scope {
			Some(scope) => data.scopes.entry(scope).or_insert(Value::Null),
			None => &mut data.default,
		};
		insert(tree, path, value.into());
	}

	/// Scopes with overrides, sorted
	pub fn scopes(&self) -> Vec<ScopeId> {
		let mut scopes: Vec<ScopeId> = self.data.read().scopes.keys().copied().collect();
		scopes.sort();
		scopes
	}
}

impl ConfigStore for TreeStore {
	fn get_value(&self, scope: ScopeId, path: &str) -> CfgResult<Option<SettingValue>> {
		let data = self.data.read();
		let node = data
			.scopes
			.get(&scope)
			.and_then(|tree| lookup(tree, path))
			.filter(|node| !node.is_null())
			.or_else(|| lookup(&data.default, path));

		let Some(node) = node else {
			return Ok(None);
		};
		let value = SettingValue::from_json(node);
		if value.is_none() && !node.is_null() {
			debug!("Config path {} holds a non-scalar value, ignoring", path);
		}
		Ok(value)
	}
}


// vim: ts=4
