//! Frame <-> JSON codec for the transport layer.
//!
//! - Text frames => `serde_json::Value`
//! - Binary frames are not part of the protocol => transport error
//! - Ping/Pong/raw frames are surfaced as `Control` and skipped by the reader

use serde::Serialize;
use serde_json::Value;
use tokio_tungstenite::tungstenite::Message;

use deckbridge_core::error::{DeckError, Result};

#[derive(Debug)]
pub enum Inbound {
    Json(Value),
    Control,
    Close,
}

pub fn decode(msg: Message) -> Result<Inbound> {
    match msg {
        Message::Text(s) => {
            let v: Value = serde_json::from_str(&s)
                .map_err(|e| DeckError::Transport(format!("malformed frame: {e}")))?;
            Ok(Inbound::Json(v))
        }
        Message::Binary(b) => Err(DeckError::Transport(format!(
            "unexpected binary frame ({} bytes)",
            b.len()
        ))),
        Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => Ok(Inbound::Control),
        Message::Close(_) => Ok(Inbound::Close),
    }
}

/// Serialize one outbound message into a text frame.
pub fn encode<T: Serialize>(event: &'static str, v: &T) -> Result<Message> {
    serde_json::to_string(v)
        .map(Message::Text)
        .map_err(|e| DeckError::EncodingFailure {
            event,
            reason: e.to_string(),
        })
}
