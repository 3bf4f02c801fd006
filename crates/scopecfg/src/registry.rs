//! Static registry of externally sourced settings
//!
//! Every key the resolver reads from the store is listed here. Snapshots walk
//! this list to materialize the whole cache, so a key missing from
//! [`SETTINGS`] is never captured.

use serde::Serialize;

/// Setting keys, relative to the resolver's configuration root
pub mod keys {
	pub const DEBUG: &str = "debug";
	pub const PROTOCOL: &str = "protocol";
	/// Misspelled predecessor of [`PROTOCOL`], still set by older deployments
	pub const PROTOCOL_LEGACY: &str = "protokoll";
	pub const ADDRESS: &str = "address";
	pub const PORT: &str = "port";
	pub const CONTEXT: &str = "context";
	pub const CHANNEL: &str = "channel";
	pub const SECONDARY_CHANNELS: &str = "secondary_channels";
	pub const LANGUAGE: &str = "language";
	pub const AUTH_TYPE: &str = "auth_type";
	pub const AUTH_USER: &str = "auth_user";
	pub const AUTH_PASSWORD: &str = "auth_password";
	pub const AUTH_PREFIX: &str = "auth_advancedPrefix";
	pub const AUTH_POSTFIX: &str = "auth_advancedPostfix";
	pub const ENCODING_PAGE_URI: &str = "encoding/pageURI";
	pub const ENCODING_PAGE_CONTENT: &str = "encoding/pageContent";
}

/// Expected shape of a raw setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingKind {
	String,
	Int,
	Bool,
}

/// Setting definition - metadata for one externally sourced key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SettingDefinition {
	/// Path below the configuration root (e.g., "encoding/pageURI")
	pub key: &'static str,
	pub description: &'static str,
	pub kind: SettingKind,
}

const fn def(key: &'static str, description: &'static str, kind: SettingKind) -> SettingDefinition {
	SettingDefinition { key, description, kind }
}

pub const SETTINGS: &[SettingDefinition] = &[
	def(keys::DEBUG, "Enable debug output of the search client (literal \"true\")", SettingKind::String),
	def(keys::PROTOCOL, "Request protocol of the search server (http/https)", SettingKind::String),
	def(keys::PROTOCOL_LEGACY, "Legacy spelling of the request protocol", SettingKind::String),
	def(keys::ADDRESS, "Host name of the search server", SettingKind::String),
	def(keys::PORT, "TCP port of the search server", SettingKind::Int),
	def(keys::CONTEXT, "Application context path on the search server", SettingKind::String),
	def(keys::CHANNEL, "Primary search channel", SettingKind::String),
	def(keys::SECONDARY_CHANNELS, "Additional channels, separated by ';'", SettingKind::String),
	def(keys::LANGUAGE, "Language sent with requests", SettingKind::String),
	def(keys::AUTH_TYPE, "Authentication type (http, simple or advanced)", SettingKind::String),
	def(keys::AUTH_USER, "Authentication user name", SettingKind::String),
	def(keys::AUTH_PASSWORD, "Authentication password", SettingKind::String),
	def(keys::AUTH_PREFIX, "Salt prefix for advanced authentication", SettingKind::String),
	def(keys::AUTH_POSTFIX, "Salt postfix for advanced authentication", SettingKind::String),
	def(keys::ENCODING_PAGE_URI, "Character encoding of client URLs", SettingKind::String),
	def(keys::ENCODING_PAGE_CONTENT, "Character encoding of page content", SettingKind::String),
];

/// Get a setting definition by key
pub fn get(key: &str) -> Option<&'static SettingDefinition> {
	SETTINGS.iter().find(|def| def.key == key)
}

/// List all registered keys in registry order
pub fn keys() -> impl Iterator<Item = &'static str> {
	SETTINGS.iter().map(|def| def.key)
}


// vim: ts=4
