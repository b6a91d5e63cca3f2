//! deckbridge core: the wire codec for the Stream Deck plugin protocol.
//!
//! This crate turns inbound JSON envelopes into typed [`protocol::Event`]s and
//! typed [`protocol::Command`]s into outbound envelopes. It carries no
//! transport or runtime dependencies: decode and encode are pure functions
//! over `serde_json::Value`, so the same codec serves the WebSocket session,
//! tests, and any other transport.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Malformed host
//! traffic surfaces as [`DeckError`] instead of crashing the plugin process.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{DeckError, ErrorCode, Result};
