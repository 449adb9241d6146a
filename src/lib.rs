mod classifier;
mod custom_vars;
mod db;
mod error;
mod helpers;
mod parser;
mod parser_data;
mod report;
mod screen;
mod types;

pub use classifier::{ClientClassifier, UNKNOWN};
pub use custom_vars::{build_default_custom_vars, CustomValue, CustomVars, WellKnownVar};
pub use db::{BrowserEntry, DeviceMarkers, MarkerEntry, OsEntry, RuleSet};
pub use error::{Error, Result};
pub use screen::*;
pub use types::*;
