//! Tree store lookup and loading tests

use std::io::Write;

use scopecfg_store_adapter_tree::TreeStore;
use scopecfg_types::config_store::ConfigStore;
use scopecfg_types::error::Error;
use scopecfg_types::types::ScopeId;
use scopecfg_types::value::SettingValue;
use tempfile::NamedTempFile;

const YAML: &str = r#"
default:
  factfinder:
    search:
      protocol: https
      port: 8080
      debug: true
      channel: en
      encoding:
        pageURI: UTF-8
stores:
  "2":
    factfinder:
      search:
        channel: de
        address: null
"#;

#[test]
fn test_default_tree_lookup() {
	let store = TreeStore::from_yaml_str(YAML).unwrap();
	let scope = ScopeId(0);

	assert_eq!(
		store.get_value(scope, "factfinder/search/protocol").unwrap(),
		Some(SettingValue::from("https"))
	);
	assert_eq!(
		store.get_value(scope, "factfinder/search/port").unwrap(),
		Some(SettingValue::Int(8080))
	);
	// YAML booleans stay booleans
	assert_eq!(
		store.get_value(scope, "factfinder/search/debug").unwrap(),
		Some(SettingValue::Bool(true))
	);
	assert_eq!(
		store.get_value(scope, "factfinder/search/encoding/pageURI").unwrap(),
		Some(SettingValue::from("UTF-8"))
	);
}

#[test]
fn test_scope_override_beats_default() {
	let store = TreeStore::from_yaml_str(YAML).unwrap();

	assert_eq!(
		store.get_value(ScopeId(2), "factfinder/search/channel").unwrap(),
		Some(SettingValue::from("de"))
	);
	assert_eq!(
		store.get_value(ScopeId(0), "factfinder/search/channel").unwrap(),
		Some(SettingValue::from("en"))
	);
	// Unknown scopes read the default tree
	assert_eq!(
		store.get_value(ScopeId(9), "factfinder/search/channel").unwrap(),
		Some(SettingValue::from("en"))
	);
}

#[test]
fn test_scope_falls_back_for_unset_keys() {
	let store = TreeStore::from_yaml_str(YAML).unwrap();

	assert_eq!(
		store.get_value(ScopeId(2), "factfinder/search/protocol").unwrap(),
		Some(SettingValue::from("https"))
	);
	// Null in the override is treated as unset
	assert_eq!(store.get_value(ScopeId(2), "factfinder/search/address").unwrap(), None);
}

#[test]
fn test_missing_and_non_scalar_paths() {
	let store = TreeStore::from_yaml_str(YAML).unwrap();

	assert_eq!(store.get_value(ScopeId(0), "factfinder/search/language").unwrap(), None);
	assert_eq!(store.get_value(ScopeId(0), "factfinder/search/encoding").unwrap(), None);
	assert_eq!(store.get_value(ScopeId(0), "other/module").unwrap(), None);
}

#[test]
fn test_malformed_yaml() {
	let result = TreeStore::from_yaml_str("default: [unclosed");
	assert!(matches!(result, Err(Error::Yaml(_))));
}

#[test]
fn test_invalid_store_id() {
	let result = TreeStore::from_json_str(r#"{"stores": {"main": {}}}"#);
	assert!(matches!(result, Err(Error::Parse(_))));
}

#[test]
fn test_set_values() {
	let store = TreeStore::new();
	store.set(None, "factfinder/search/auth_type", "simple");
	store.set(Some(ScopeId(3)), "factfinder/search/auth_type", "advanced");

	assert_eq!(
		store.get_value(ScopeId(0), "factfinder/search/auth_type").unwrap(),
		Some(SettingValue::from("simple"))
	);
	assert_eq!(
		store.get_value(ScopeId(3), "factfinder/search/auth_type").unwrap(),
		Some(SettingValue::from("advanced"))
	);
	assert_eq!(store.scopes(), vec![ScopeId(3)]);
}

#[test]
fn test_load_json_file() {
	let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
	write!(
		file,
		r#"{{"default": {{"factfinder": {{"search": {{"language": "de"}}}}}}, "stores": {{"1": {{}}}}}}"#
	)
	.unwrap();

	let store = TreeStore::from_file(file.path()).unwrap();
	assert_eq!(
		store.get_value(ScopeId(1), "factfinder/search/language").unwrap(),
		Some(SettingValue::from("de"))
	);
	assert_eq!(store.scopes(), vec![ScopeId(1)]);
}

#[test]
fn test_load_yaml_file() {
	let mut file = NamedTempFile::new().unwrap();
	file.write_all(YAML.as_bytes()).unwrap();

	let store = TreeStore::from_file(file.path()).unwrap();
	assert_eq!(store.scopes(), vec![ScopeId(2)]);
}

#[test]
fn test_missing_file() {
	let result = TreeStore::from_file(std::path::Path::new("/nonexistent/config.yaml"));
	assert!(matches!(result, Err(Error::Io(_))));
}

// vim: ts=4
