//! Authentication mode of the search server

use serde::{Deserialize, Serialize};

use scopecfg_types::value::SettingValue;

/// How requests to the search server are authenticated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthMode {
	/// HTTP basic authentication; also the fallback for unknown values
	#[default]
	#[serde(rename = "http")]
	Http,
	/// Credentials with an MD5-hashed password in the query string
	#[serde(rename = "simple")]
	Simple,
	/// Like `Simple`, with the password salted by prefix and postfix
	#[serde(rename = "advanced")]
	Advanced,
}

impl AuthMode {
	/// Map a configured token to a mode. Matching is exact; anything
	/// unrecognized, including different casing, yields `Http`.
	pub fn from_token(token: &str) -> Self {
		match token {
			"simple" => AuthMode::Simple,
			"advanced" => AuthMode::Advanced,
			_ => AuthMode::Http,
		}
	}

	/// Resolve a raw `auth_type` value. Non-string values count as unrecognized.
	pub fn from_setting(value: Option<&SettingValue>) -> Self {
		match value {
			Some(SettingValue::String(token)) => Self::from_token(token),
			_ => AuthMode::Http,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			AuthMode::Http => "http",
			AuthMode::Simple => "simple",
			AuthMode::Advanced => "advanced",
		}
	}
}

impl std::fmt::Display for AuthMode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}


// vim: ts=4
