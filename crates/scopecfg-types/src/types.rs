//! Common types used throughout scopecfg.

use serde::{Deserialize, Serialize};

// ScopeId //
//*********//
/// Store / tenant identifier a configuration lookup is made for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(pub u32);

impl ScopeId {
	/// Scope used before anything has been bound explicitly
	pub const DEFAULT: ScopeId = ScopeId(0);
}

impl std::fmt::Display for ScopeId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl std::str::FromStr for ScopeId {
	type Err = std::num::ParseIntError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(ScopeId(s.trim().parse()?))
	}
}

impl Serialize for ScopeId {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_u32(self.0)
	}
}

impl<'de> Deserialize<'de> for ScopeId {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(ScopeId(u32::deserialize(deserializer)?))
	}
}


// vim: ts=4
