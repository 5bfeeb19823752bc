//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::{Section, VnetConfig};
use std::path::Path;

/// File name looked up by [`load_config`].
pub const CONFIG_FILE_NAME: &str = "vnet.toml";

/// Loads `<dir>/vnet.toml`, falling back to defaults when the file is absent.
pub fn load_config(dir: &Path) -> Result<VnetConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(VnetConfig::default());
    }
    let content = std::fs::read_to_string(&path)?;
    load_config_from_str(&content)
}

/// Parses and validates configuration text.
pub fn load_config_from_str(content: &str) -> Result<VnetConfig, ConfigError> {
    let config: VnetConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &VnetConfig) -> Result<(), ConfigError> {
    if let Some(names) = &config.dump.sections {
        for name in names {
            if Section::from_name(name).is_none() {
                return Err(ConfigError::ValidationError(format!(
                    "unknown dump section `{name}`"
                )));
            }
        }
    }
    for name in &config.check.deny {
        if config.check.allow.contains(name) {
            return Err(ConfigError::ValidationError(format!(
                "rule `{name}` is both allowed and denied"
            )));
        }
    }
    Ok(())
}
