use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use reqwest::{Client, StatusCode, Url};
use tracing::warn;

use crate::config::types::EndpointConfig;
use crate::error::DispatchError;

/// One composed message, produced per send attempt and consumed by the
/// dispatch call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub format: String,
    pub message_type: String,
    pub body: String,
}

/// Outbound dispatch port. Simulation tasks only see this trait; the
/// concrete HTTP transport lives behind it.
#[async_trait]
pub trait Dispatch: Send + Sync {
    /// Submits one rendered message to the endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error when the message format is unsupported, the request
    /// cannot be built or sent, or the endpoint responds with a non-2xx
    /// status.
    async fn send(&self, message: &RenderedMessage) -> Result<StatusCode, DispatchError>;
}

pub struct HttpDispatcher {
    client: Client,
    endpoint: Url,
    dynamic_path: bool,
    auth_header: Option<HeaderValue>,
}

impl HttpDispatcher {
    /// Builds a dispatcher from the endpoint configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the endpoint URL is invalid, the auth type is
    /// unhandled, or the HTTP client cannot be constructed.
    pub fn new(config: &EndpointConfig) -> Result<Self, DispatchError> {
        let endpoint =
            Url::parse(&config.api_endpoint).map_err(|err| DispatchError::InvalidUrl {
                url: config.api_endpoint.clone(),
                source: err,
            })?;
        let auth_header = resolve_auth(config)?;
        let client = Client::builder()
            .build()
            .map_err(|err| DispatchError::BuildClient { source: err })?;
        Ok(Self {
            client,
            endpoint,
            dynamic_path: config.dynamic_path,
            auth_header,
        })
    }

    pub(crate) fn target_url(&self, message_type: &str) -> Result<Url, DispatchError> {
        if !self.dynamic_path {
            return Ok(self.endpoint.clone());
        }
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|()| DispatchError::EndpointNotABase {
                url: self.endpoint.to_string(),
            })?
            .pop_if_empty()
            .push(message_type);
        Ok(url)
    }
}

#[async_trait]
impl Dispatch for HttpDispatcher {
    async fn send(&self, message: &RenderedMessage) -> Result<StatusCode, DispatchError> {
        let content_type = content_type_for(&message.format)?;
        let url = self.target_url(&message.message_type)?;

        let mut request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, content_type)
            .body(message.body.clone());
        if let Some(auth) = &self.auth_header {
            request = request.header(AUTHORIZATION, auth.clone());
        }

        let response = request
            .send()
            .await
            .map_err(|err| DispatchError::RequestFailed { source: err })?;
        let status = response.status();
        if !status.is_success() {
            return Err(DispatchError::FailureStatus { status });
        }
        Ok(status)
    }
}

pub(crate) fn resolve_auth(config: &EndpointConfig) -> Result<Option<HeaderValue>, DispatchError> {
    match config.auth_type.to_lowercase().as_str() {
        "basic" => {
            let credentials =
                BASE64_STANDARD.encode(format!("{}:{}", config.username, config.password));
            let value = HeaderValue::from_str(&format!("Basic {}", credentials))
                .map_err(|err| DispatchError::InvalidAuthHeader { source: err })?;
            Ok(Some(value))
        }
        "oauth" => {
            warn!("OAuth is not implemented; requests will be sent unauthenticated");
            Ok(None)
        }
        "" | "none" | "anonymous" => Ok(None),
        other => Err(DispatchError::UnhandledAuthType {
            value: other.to_owned(),
        }),
    }
}

pub(crate) fn content_type_for(format: &str) -> Result<&'static str, DispatchError> {
    match format.to_lowercase().as_str() {
        "json" => Ok("application/json"),
        "xml" => Ok("application/xml"),
        other => Err(DispatchError::UnsupportedFormat {
            format: other.to_owned(),
        }),
    }
}
