use serde::Deserialize;

/// Target endpoint settings, read once at startup and shared read-only by
/// every simulation task. Field names follow the on-disk `config.json`
/// schema.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EndpointConfig {
    #[serde(rename = "APIEndpoint")]
    pub api_endpoint: String,
    /// When set, the target path is the endpoint joined with the message type.
    #[serde(rename = "dynamicPath", default)]
    pub dynamic_path: bool,
    /// One of `none` (also empty or `anonymous`), `basic`, or `oauth`.
    #[serde(rename = "AuthType", default)]
    pub auth_type: String,
    #[serde(rename = "Username", default)]
    pub username: String,
    #[serde(rename = "Password", default)]
    pub password: String,
}
