//! Parameter translation tables
//!
//! Requests arrive in the shop's vocabulary ("client") and are forwarded in
//! the search server's vocabulary ("server"). These tables are part of the
//! protocol contract with the transport layer and never change at runtime.

use std::collections::HashSet;

/// Client parameter name -> server parameter name
pub const CLIENT_MAPPINGS: &[(&str, &str)] = &[("query", "q"), ("page", "p")];

/// Server parameter name -> client parameter name
pub const SERVER_MAPPINGS: &[(&str, &str)] = &[];

/// Dropped when translating client requests for the server
pub const IGNORED_CLIENT_PARAMETERS: &[&str] =
	&["channel", "format", "log", "productsPerPage", "query", "catalog", "navigation"];

/// Dropped when translating server parameters back into client URLs
pub const IGNORED_SERVER_PARAMETERS: &[&str] =
	&["q", "p", "limit", "is_ajax", "type_search", "order", "dir", "mode"];

pub const REQUIRED_CLIENT_PARAMETERS: &[&str] = &[];
pub const REQUIRED_SERVER_PARAMETERS: &[&str] = &[];

/// Empty whitelists place no restriction on parameter names
pub const WHITELIST_CLIENT_PARAMETERS: &[&str] = &[];
pub const WHITELIST_SERVER_PARAMETERS: &[&str] = &[];

/// All tables for one translation direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamPolicy {
	pub mappings: &'static [(&'static str, &'static str)],
	pub ignored: &'static [&'static str],
	pub required: &'static [&'static str],
	pub whitelist: &'static [&'static str],
}

impl ParamPolicy {
	pub const CLIENT: ParamPolicy = ParamPolicy {
		mappings: CLIENT_MAPPINGS,
		ignored: IGNORED_CLIENT_PARAMETERS,
		required: REQUIRED_CLIENT_PARAMETERS,
		whitelist: WHITELIST_CLIENT_PARAMETERS,
	};

	pub const SERVER: ParamPolicy = ParamPolicy {
		mappings: SERVER_MAPPINGS,
		ignored: IGNORED_SERVER_PARAMETERS,
		required: REQUIRED_SERVER_PARAMETERS,
		whitelist: WHITELIST_SERVER_PARAMETERS,
	};

	pub fn client() -> Self {
		Self::CLIENT
	}

	pub fn server() -> Self {
		Self::SERVER
	}

	/// Translated name, or `name` itself when no mapping exists
	pub fn map_name<'a>(&self, name: &'a str) -> &'a str {
		self.mappings.iter().find(|(from, _)| *from == name).map_or(name, |(_, to)| *to)
	}

	pub fn is_ignored(&self, name: &str) -> bool {
		self.ignored.contains(&name)
	}

	/// Whether `name` passes the whitelist
	pub fn is_allowed(&self, name: &str) -> bool {
		self.whitelist.is_empty() || self.whitelist.contains(&name)
	}

	/// Required parameters not present in `names`
	pub fn missing_required<'n>(&self, names: impl IntoIterator<Item = &'n str>) -> Vec<&'static str> {
		if self.required.is_empty() {
			return Vec::new();
		}
		let present: HashSet<&str> = names.into_iter().collect();
		self.required.iter().copied().filter(|name| !present.contains(name)).collect()
	}
}


// vim: ts=4
