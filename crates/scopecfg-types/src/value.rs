//! Raw setting values and the coercions applied to them
//!
//! The external store hands back loosely typed values: a port may arrive as
//! `8080` or `"8080"`, a flag as `true` or `"true"`. Coercions here never
//! fail; they return `None` or a neutral value instead.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Setting value types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
	Bool(bool), // Must be before Int to avoid bool -> int coercion
	Int(i64),
	Float(f64),
	String(Box<str>),
}

impl SettingValue {
	/// Convert a JSON scalar into a setting value. Null, arrays and objects
	/// have no scalar representation and yield `None`.
	pub fn from_json(value: &serde_json::Value) -> Option<Self> {
		match value {
			serde_json::Value::Bool(b) => Some(SettingValue::Bool(*b)),
			serde_json::Value::Number(n) => n
				.as_i64()
				.map(SettingValue::Int)
				.or_else(|| n.as_f64().map(SettingValue::Float)),
			serde_json::Value::String(s) => Some(SettingValue::String(s.as_str().into())),
			serde_json::Value::Null
			| serde_json::Value::Array(_)
			| serde_json::Value::Object(_) => None,
		}
	}

	/// String form of the value. Strings are borrowed as-is, scalars rendered.
	pub fn as_str(&self) -> Cow<'_, str> {
		match self {
			SettingValue::String(s) => Cow::Borrowed(&**s),
			SettingValue::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
			SettingValue::Int(i) => Cow::Owned(i.to_string()),
			SettingValue::Float(f) => Cow::Owned(f.to_string()),
		}
	}

	/// Integer form of the value, if it has one
	#[allow(clippy::cast_possible_truncation)]
	pub fn as_int(&self) -> Option<i64> {
		match self {
			SettingValue::Int(i) => Some(*i),
			SettingValue::Float(f) if f.is_finite() => Some(f.trunc() as i64),
			SettingValue::Float(_) => None,
			SettingValue::Bool(b) => Some(i64::from(*b)),
			SettingValue::String(s) => s.trim().parse().ok(),
		}
	}

	/// Loose truthiness: `false`, `0`, `0.0`, `""` and `"0"` are falsy
	pub fn is_truthy(&self) -> bool {
		match self {
			SettingValue::Bool(b) => *b,
			SettingValue::Int(i) => *i != 0,
			SettingValue::Float(f) => *f != 0.0,
			SettingValue::String(s) => !s.is_empty() && &**s != "0",
		}
	}

	/// Get the type name for log messages
	pub fn type_name(&self) -> &'static str {
		match self {
			SettingValue::String(_) => "string",
			SettingValue::Int(_) => "int",
			SettingValue::Float(_) => "float",
			SettingValue::Bool(_) => "bool",
		}
	}
}

impl From<&str> for SettingValue {
	fn from(s: &str) -> Self {
		SettingValue::String(s.into())
	}
}

impl From<String> for SettingValue {
	fn from(s: String) -> Self {
		SettingValue::String(s.into_boxed_str())
	}
}

impl From<bool> for SettingValue {
	fn from(b: bool) -> Self {
		SettingValue::Bool(b)
	}
}

impl From<i64> for SettingValue {
	fn from(i: i64) -> Self {
		SettingValue::Int(i)
	}
}

impl std::fmt::Display for SettingValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.as_str())
	}
}


// vim: ts=4
