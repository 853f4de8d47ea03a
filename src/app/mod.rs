//! Host-side command implementations for the binary.
mod simulate;
mod test_send;

pub(crate) use simulate::run_simulate;
pub(crate) use test_send::run_test_messages;
