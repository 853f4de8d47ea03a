use std::path::Path;

use serde::Deserialize;
use tracing::{error, info};

use crate::config::types::EndpointConfig;
use crate::error::{AppResult, ConfigError};
use crate::http::{Dispatch, HttpDispatcher, RenderedMessage};

/// One plain message from the test document: no variables, no frequency.
#[derive(Debug, Deserialize)]
struct TestMessage {
    #[serde(rename = "MessageFormat")]
    message_format: String,
    #[serde(rename = "MessageType")]
    message_type: String,
    #[serde(rename = "Message")]
    message: String,
}

/// Sends every message in the document exactly once. Send failures are
/// logged and do not stop the batch.
///
/// # Errors
///
/// Returns an error when the document cannot be loaded or the dispatcher
/// cannot be built.
pub(crate) async fn run_test_messages(config: &EndpointConfig, data_path: &Path) -> AppResult<()> {
    let messages = load_test_messages(data_path)?;
    if messages.is_empty() {
        info!(path = %data_path.display(), "No messages to send");
        return Ok(());
    }

    let dispatcher = HttpDispatcher::new(config)?;
    for message in messages {
        match dispatcher.send(&message).await {
            Ok(status) => info!(
                message_type = %message.message_type,
                %status,
                "Message sent successfully"
            ),
            Err(err) => error!(
                message_type = %message.message_type,
                %err,
                "Error sending message"
            ),
        }
    }
    Ok(())
}

/// Reads a multi-document YAML stream of plain messages.
fn load_test_messages(path: &Path) -> AppResult<Vec<RenderedMessage>> {
    let content = std::fs::read_to_string(path).map_err(|err| ConfigError::ReadMessages {
        path: path.to_path_buf(),
        source: err,
    })?;

    let mut messages = Vec::new();
    for document in serde_yaml::Deserializer::from_str(&content) {
        let message =
            TestMessage::deserialize(document).map_err(|err| ConfigError::ParseMessages {
                path: path.to_path_buf(),
                source: err,
            })?;
        messages.push(RenderedMessage {
            format: message.message_format,
            message_type: message.message_type,
            body: message.message,
        });
    }
    Ok(messages)
}
