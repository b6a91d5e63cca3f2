//! Transport layer (WebSocket client).
//!
//! Exposes the session that owns the host connection and the codec that
//! turns frames into JSON values and back. Neither knows about event or
//! command variants.

pub mod codec;
pub mod session;

pub use session::Session;
