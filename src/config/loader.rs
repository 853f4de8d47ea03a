use std::path::Path;

use crate::error::{AppResult, ConfigError};

use super::types::EndpointConfig;

/// Loads the endpoint configuration from the provided path.
///
/// # Errors
///
/// Returns an error when the config file cannot be read or parsed.
pub fn load_config(path: &Path) -> AppResult<EndpointConfig> {
    let content = std::fs::read_to_string(path).map_err(|err| ConfigError::ReadConfig {
        path: path.to_path_buf(),
        source: err,
    })?;
    let config = serde_json::from_str(&content).map_err(|err| ConfigError::ParseJson {
        path: path.to_path_buf(),
        source: err,
    })?;
    Ok(config)
}
