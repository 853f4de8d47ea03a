use thiserror::Error;

use super::ConfigError;

/// Failures while turning one message definition into a runnable task.
/// Never fatal to the coordinator: a frequency, format, or template failure
/// terminates only the owning task, and a variable failure only drops that
/// variable from the binding map.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid frequency '{value}': {source}")]
    Frequency {
        value: String,
        #[source]
        source: ConfigError,
    },
    #[error("Unsupported message format '{format}'. Use 'json' or 'xml'.")]
    UnsupportedFormat { format: String },
    #[error("Unterminated placeholder opened at byte {offset}.")]
    UnterminatedPlaceholder { offset: usize },
    #[error("Empty placeholder at byte {offset}.")]
    EmptyPlaceholder { offset: usize },
    #[error("A '{kind}' variable expects exactly 2 comma-separated values, got {count}.")]
    BoundsArity { kind: &'static str, count: usize },
    #[error("Invalid integer '{token}' in '{kind}' variable: {source}")]
    BoundsInteger {
        kind: &'static str,
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Random range is empty: low {low} > high {high}.")]
    EmptyRandomRange { low: i64, high: i64 },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template references unbound variable '{name}'.")]
    UnboundVariable { name: String },
}
