//! Protocol modules.
//!
//! - `envelope`: wire envelope shapes shared by both directions.
//! - `event`: discriminator registry and typed inbound events.
//! - `command`: typed outbound commands and their encoder.
//! - `types`: value objects nested in payloads.
//! - `info`: the registration info blob handed over at launch.
//!
//! Decode and encode are pure and panic-free: malformed input is reported as
//! `DeckError`, never a partially populated value.

pub mod command;
pub mod envelope;
pub mod event;
pub mod info;
pub mod types;

pub use command::{encode_command, Command, CommandDescriptor};
pub use envelope::{OutboundEnvelope, Registration};
pub use event::{decode_event, decode_event_str, Event, EVENT_NAMES};
pub use types::InstanceId;
