//! HTTP request construction and dispatch.
mod dispatcher;

#[cfg(test)]
mod tests;

pub use dispatcher::{Dispatch, HttpDispatcher, RenderedMessage};

#[cfg(test)]
pub(crate) use dispatcher::{content_type_for, resolve_auth};
