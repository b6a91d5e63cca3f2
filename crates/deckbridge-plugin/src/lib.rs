//! deckbridge plugin runtime.
//!
//! Wires launch config, the WebSocket session, and the action dispatcher into
//! a read loop. The codec itself lives in `deckbridge-core`; this crate only
//! moves JSON between the socket and the codec.

pub mod actions;
pub mod config;
pub mod dispatch;
pub mod runner;
pub mod transport;
