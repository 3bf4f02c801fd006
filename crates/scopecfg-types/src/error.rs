//! Error type shared by the resolver and the store adapters.
//!
//! Derived configuration accessors never return these: a failed lookup is
//! absorbed by the resolver and cached as an absent value. They surface only
//! from adapter construction and snapshot (de)serialization.

pub type CfgResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// The backing store could not answer (connection lost, lock poisoned, ...)
	Unavailable(String),
	/// A stored document or value has the wrong shape
	Parse(String),

	// externals
	Io(std::io::Error),
	Yaml(serde_yaml::Error),
	Json(serde_json::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_yaml::Error> for Error {
	fn from(err: serde_yaml::Error) -> Self {
		Self::Yaml(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::Json(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::Unavailable(msg) => write!(f, "config store unavailable: {}", msg),
			Error::Parse(msg) => write!(f, "parse error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
			Error::Yaml(err) => write!(f, "yaml error: {}", err),
			Error::Json(err) => write!(f, "json error: {}", err),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Io(err) => Some(err),
			Error::Yaml(err) => Some(err),
			Error::Json(err) => Some(err),
			_ => None,
		}
	}
}


// vim: ts=4
