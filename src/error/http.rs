use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Unsupported message format '{format}'. Use 'json' or 'xml'.")]
    UnsupportedFormat { format: String },
    #[error("Unhandled auth type '{value}'. Use 'none', 'basic', or 'oauth'.")]
    UnhandledAuthType { value: String },
    #[error("Basic auth credentials are not a valid header value: {source}")]
    InvalidAuthHeader {
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },
    #[error("Invalid endpoint URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Endpoint URL '{url}' cannot take a dynamic path segment.")]
    EndpointNotABase { url: String },
    #[error("Failed to build HTTP client: {source}")]
    BuildClient {
        #[source]
        source: reqwest::Error,
    },
    #[error("POST request failed: {source}")]
    RequestFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Endpoint returned {status}.")]
    FailureStatus { status: reqwest::StatusCode },
}
