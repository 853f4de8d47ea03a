//! Endpoint configuration loading and duration parsing.
mod loader;
mod parse;
pub mod types;


pub use loader::load_config;
pub use parse::parse_duration_value;
