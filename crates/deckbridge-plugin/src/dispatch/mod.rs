//! Dispatcher module exports.
//!
//! Re-exports the dispatcher and handler traits so plugins can depend on this
//! module directly.

pub mod context;
pub mod dispatcher;

pub use context::PluginCtx;
pub use dispatcher::{ActionHandler, Dispatcher, GlobalHandler};
