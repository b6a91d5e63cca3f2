//! Built-in actions used by the demo binary.

pub mod counter;
pub mod host_log;

pub use counter::{CounterAction, COUNTER_ACTION};
pub use host_log::HostLog;
