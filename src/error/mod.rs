mod app;
mod config;
mod http;
mod simulation;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use http::DispatchError;
pub use simulation::{ParseError, RenderError};
