use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{AppResult, ConfigError};

/// One declarative message-sending rule. Immutable once loaded; drives
/// exactly one simulation task for that task's entire lifetime. Field names
/// follow the on-disk YAML schema.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageDefinition {
    #[serde(rename = "MessageFormat")]
    pub message_format: String,
    #[serde(rename = "MessageType")]
    pub message_type: String,
    /// Body template with `{{name}}` placeholders.
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "Variables", default)]
    pub variables: BTreeMap<String, VariableSpec>,
    /// Send period, e.g. `500ms` or `5s`.
    #[serde(rename = "Frequency")]
    pub frequency: String,
}

/// Raw variable declaration, consumed once at task start.
#[derive(Debug, Clone, Deserialize)]
pub struct VariableSpec {
    /// One of `static`, `sequence`, `range`, or `random`. Anything else is
    /// ignored and the variable is omitted from bindings.
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Value", default)]
    pub value: String,
}

/// Loads the simulation definitions document: a YAML sequence of message
/// definitions. A malformed document is fatal to simulation start; the
/// definitions inside are validated independently per task afterwards.
///
/// # Errors
///
/// Returns an error when the document cannot be read or parsed.
pub fn load_definitions(path: &Path) -> AppResult<Vec<MessageDefinition>> {
    let content = std::fs::read_to_string(path).map_err(|err| ConfigError::ReadDefinitions {
        path: path.to_path_buf(),
        source: err,
    })?;
    let definitions =
        serde_yaml::from_str(&content).map_err(|err| ConfigError::ParseDefinitions {
            path: path.to_path_buf(),
            source: err,
        })?;
    Ok(definitions)
}
