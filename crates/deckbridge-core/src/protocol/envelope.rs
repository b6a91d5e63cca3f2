//! Wire envelopes.
//!
//! Inbound envelopes are kept as `serde_json::Value` until the event registry
//! picks a variant; see [`crate::protocol::event`]. Outbound envelopes are
//! built by [`crate::protocol::command`].

use serde::Serialize;
use serde_json::Value;

/// Discriminator field shared by every inbound and outbound message.
pub const EVENT_FIELD: &str = "event";

/// Outbound envelope (one command).
///
/// `context` is always present: either the command's own instance id or the
/// session identity. The other optionals are omitted when unset, and
/// `payload` is only set for commands that carry one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutboundEnvelope {
    pub event: &'static str,
    pub context: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

/// Registration handshake, sent once right after the socket opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration<'a> {
    pub event: &'a str,
    pub uuid: &'a str,
}

/// Read the discriminator of a raw envelope, if any.
pub fn discriminator(raw: &Value) -> Option<&str> {
    raw.get(EVENT_FIELD).and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serde_json::json;

    #[test]
    fn registration_shape() {
        let r = Registration {
            event: "registerPlugin",
            uuid: "plugin-uuid",
        };
        assert_eq!(
            serde_json::to_value(r).unwrap(),
            json!({"event": "registerPlugin", "uuid": "plugin-uuid"})
        );
    }

    #[test]
    fn discriminator_requires_a_string() {
        assert_eq!(discriminator(&json!({"event": "keyUp"})), Some("keyUp"));
        assert_eq!(discriminator(&json!({"event": 3})), None);
        assert_eq!(discriminator(&json!([])), None);
    }
}
