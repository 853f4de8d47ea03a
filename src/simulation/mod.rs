//! The simulation engine: variable resolution, body templating, and
//! per-definition periodic scheduling.
//!
//! Each message definition is driven by its own task with exclusively-owned
//! variable state; tasks never communicate and a failure in one never stops
//! another.
mod coordinator;
mod definition;
mod task;
mod template;
mod variables;


pub use coordinator::Simulation;
pub use definition::{MessageDefinition, VariableSpec, load_definitions};
pub use template::CompiledTemplate;
pub use variables::{ResolvedVariable, resolve};
