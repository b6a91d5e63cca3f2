//! Shared error type across deckbridge crates.

use serde_json::Value;
use thiserror::Error;

/// Stable error codes, independent of the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Connection or registration handshake failed.
    Connection,
    /// Send/receive on an established channel failed.
    Transport,
    /// Inbound discriminator names no known event.
    UnknownEvent,
    /// Inbound fields do not match the variant's shape.
    MalformedPayload,
    /// Command payload could not be marshaled.
    EncodingFailure,
    /// Bad launch arguments or config file.
    InvalidConfig,
    /// Application handler failure.
    Handler,
}

impl ErrorCode {
    /// String representation used in logs and test vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Connection => "CONNECTION",
            ErrorCode::Transport => "TRANSPORT",
            ErrorCode::UnknownEvent => "UNKNOWN_EVENT",
            ErrorCode::MalformedPayload => "MALFORMED_PAYLOAD",
            ErrorCode::EncodingFailure => "ENCODING_FAILURE",
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::Handler => "HANDLER",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, DeckError>;

/// Unified error type used by core and plugin runtime.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("connection failed: {0}")]
    Connection(String),
    #[error("transport: {0}")]
    Transport(String),
    #[error("connection closed by host")]
    Closed,
    /// The raw envelope is kept for diagnostics.
    #[error("unknown event kind: {event:?}")]
    UnknownEventKind { event: String, raw: Value },
    #[error("malformed {event:?} event: {reason}")]
    MalformedPayload {
        event: String,
        raw: Value,
        reason: String,
    },
    #[error("failed to encode {event} command: {reason}")]
    EncodingFailure { event: &'static str, reason: String },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("handler: {0}")]
    Handler(String),
}

impl DeckError {
    /// Map to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            DeckError::Connection(_) => ErrorCode::Connection,
            DeckError::Transport(_) | DeckError::Closed => ErrorCode::Transport,
            DeckError::UnknownEventKind { .. } => ErrorCode::UnknownEvent,
            DeckError::MalformedPayload { .. } => ErrorCode::MalformedPayload,
            DeckError::EncodingFailure { .. } => ErrorCode::EncodingFailure,
            DeckError::InvalidConfig(_) => ErrorCode::InvalidConfig,
            DeckError::Handler(_) => ErrorCode::Handler,
        }
    }

    /// Whether the session cannot continue after this error.
    ///
    /// Decode failures only spoil one message; the read loop may skip them.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            DeckError::Connection(_)
                | DeckError::Transport(_)
                | DeckError::Closed
                | DeckError::EncodingFailure { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_reports_transport_code() {
        assert_eq!(DeckError::Closed.code().as_str(), "TRANSPORT");
        assert!(DeckError::Closed.is_fatal());
    }

    #[test]
    fn decode_errors_are_not_fatal() {
        let e = DeckError::UnknownEventKind {
            event: "dialRotate".into(),
            raw: Value::Null,
        };
        assert_eq!(e.code(), ErrorCode::UnknownEvent);
        assert!(!e.is_fatal());
    }
}
