//! Per-operation timeouts
//!
//! Connect and read timeouts the transport layer must apply for each kind
//! of request to the search server.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Lifetime of the lock serializing product imports, in seconds (2 hours)
pub const IMPORT_SEMAPHORE_TIMEOUT_SECS: u64 = 7200;

/// Kind of request sent to the search server
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
	/// Search and every request without a dedicated entry
	Search,
	Suggest,
	Tracking,
	Import,
}

/// Connect/read timeout pair, in whole seconds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Timeouts {
	pub connect_secs: u64,
	pub read_secs: u64,
}

impl Timeouts {
	pub const DEFAULT: Timeouts = Timeouts::new(2, 4);
	pub const SUGGEST: Timeouts = Timeouts::new(1, 2);
	pub const TRACKING: Timeouts = Timeouts::new(2, 2);
	pub const IMPORT: Timeouts = Timeouts::new(10, 360);

	pub const fn new(connect_secs: u64, read_secs: u64) -> Self {
		Self { connect_secs, read_secs }
	}

	pub fn connect(&self) -> Duration {
		Duration::from_secs(self.connect_secs)
	}

	pub fn read(&self) -> Duration {
		Duration::from_secs(self.read_secs)
	}
}

impl Default for Timeouts {
	fn default() -> Self {
		Self::DEFAULT
	}
}

impl Operation {
	pub const fn timeouts(self) -> Timeouts {
		match self {
			Operation::Search => Timeouts::DEFAULT,
			Operation::Suggest => Timeouts::SUGGEST,
			Operation::Tracking => Timeouts::TRACKING,
			Operation::Import => Timeouts::IMPORT,
		}
	}
}


// vim: ts=4
