//! Parsing and validation of `vnet.toml` settings.
//!
//! The file controls how an elaborated design is dumped (which sections,
//! whether object attributes are listed) and how the structural checker
//! treats each rule (allowed or denied).

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
