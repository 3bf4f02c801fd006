//! Serializable capture of a resolver's cache
//!
//! A snapshot lets a fully resolved configuration travel with a queued job
//! or a session and be restored later without querying the store again.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSnapshot {
	pub scope: ScopeId,
	pub ids_only: bool,
	/// Setting name -> raw value; `None` for settings known to be absent
	pub values: BTreeMap<String, Option<SettingValue>>,
}

impl ConfigSnapshot {
	pub(crate) fn capture(resolver: &ScopedConfigResolver) -> Self {
		let (scope, values) = resolver.cached_values();
		Self {
			scope,
			ids_only: resolver.ids_only(),
			values: values.into_iter().map(|(k, v)| (k.into_string(), v)).collect(),
		}
	}

	pub fn to_json(&self) -> CfgResult<String> {
		Ok(serde_json::to_string(self)?)
	}

	pub fn from_json(json: &str) -> CfgResult<Self> {
		Ok(serde_json::from_str(json)?)
	}
}


// vim: ts=4
