pub use crate::config_store::ConfigStore;
pub use crate::error::{CfgResult, Error};
pub use crate::types::ScopeId;
pub use crate::value::SettingValue;

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
