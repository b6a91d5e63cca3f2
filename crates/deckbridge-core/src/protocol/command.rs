//! Outbound commands (plugin -> host).
//!
//! Every command maps to exactly one discriminator. What a command puts into
//! the envelope is declared by [`Command::descriptor`] and the addressing
//! accessors, all exhaustive matches: a new variant does not compile until
//! its envelope shape is decided.
//!
//! Addressing fields (`context`, `action`, `device`) never enter the payload.
//! Structs that store their target context mark it `#[serde(skip)]`.

use serde::Serialize;
use serde_json::Value;

use crate::error::{DeckError, Result};
use crate::protocol::envelope::OutboundEnvelope;
use crate::protocol::types::{InstanceId, TitleTarget};

/// Open a URL in the default browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenUrl {
    pub url: String,
}

impl OpenUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Write a line to the host's plugin log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogMessage {
    pub message: String,
}

impl LogMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Change the title of one action instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetTitle {
    #[serde(skip)]
    pub context: InstanceId,
    pub title: String,
    pub target: TitleTarget,
    /// State index for multi-state actions; all states when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<u32>,
}

impl SetTitle {
    pub fn new(context: InstanceId, title: impl Into<String>) -> Self {
        Self {
            context,
            title: title.into(),
            target: TitleTarget::Both,
            state: None,
        }
    }

    pub fn target(mut self, target: TitleTarget) -> Self {
        self.target = target;
        self
    }

    pub fn state(mut self, state: u32) -> Self {
        self.state = Some(state);
        self
    }
}

/// Flash the warning overlay on one instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowAlert {
    pub context: InstanceId,
}

/// Flash the checkmark overlay on one instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowOk {
    pub context: InstanceId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    OpenUrl(OpenUrl),
    LogMessage(LogMessage),
    SetTitle(SetTitle),
    ShowAlert(ShowAlert),
    ShowOk(ShowOk),
}

macro_rules! impl_from {
    ($($variant:ident),* $(,)?) => {
        $(impl From<$variant> for Command {
            fn from(c: $variant) -> Self {
                Command::$variant(c)
            }
        })*
    };
}

impl_from!(OpenUrl, LogMessage, SetTitle, ShowAlert, ShowOk);

/// Static envelope shape of one command variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDescriptor {
    /// Discriminator.
    pub event: &'static str,
    /// Whether the envelope gets a `payload` object.
    pub carries_payload: bool,
    /// Whether `context` is the command's own instance id.
    pub addressed: bool,
}

impl Command {
    pub fn descriptor(&self) -> CommandDescriptor {
        let (event, carries_payload, addressed) = match self {
            Command::OpenUrl(_) => ("openUrl", true, false),
            Command::LogMessage(_) => ("logMessage", true, false),
            Command::SetTitle(_) => ("setTitle", true, true),
            Command::ShowAlert(_) => ("showAlert", false, true),
            Command::ShowOk(_) => ("showOk", false, true),
        };
        CommandDescriptor {
            event,
            carries_payload,
            addressed,
        }
    }

    pub fn name(&self) -> &'static str {
        self.descriptor().event
    }

    /// Instance the command targets, when it is not the plugin itself.
    pub fn context(&self) -> Option<&InstanceId> {
        match self {
            Command::SetTitle(c) => Some(&c.context),
            Command::ShowAlert(c) => Some(&c.context),
            Command::ShowOk(c) => Some(&c.context),
            Command::OpenUrl(_) | Command::LogMessage(_) => None,
        }
    }

    /// No current command names an action.
    pub fn action(&self) -> Option<&str> {
        match self {
            Command::OpenUrl(_)
            | Command::LogMessage(_)
            | Command::SetTitle(_)
            | Command::ShowAlert(_)
            | Command::ShowOk(_) => None,
        }
    }

    /// No current command names a device.
    pub fn device(&self) -> Option<&str> {
        match self {
            Command::OpenUrl(_)
            | Command::LogMessage(_)
            | Command::SetTitle(_)
            | Command::ShowAlert(_)
            | Command::ShowOk(_) => None,
        }
    }

    fn payload(&self) -> Option<serde_json::Result<Value>> {
        match self {
            Command::OpenUrl(c) => Some(serde_json::to_value(c)),
            Command::LogMessage(c) => Some(serde_json::to_value(c)),
            Command::SetTitle(c) => Some(serde_json::to_value(c)),
            Command::ShowAlert(_) | Command::ShowOk(_) => None,
        }
    }
}

/// Build the outbound envelope for `cmd`.
///
/// `identity` (the plugin UUID) is the context unless the command addresses
/// a specific instance.
pub fn encode_command(cmd: &Command, identity: &str) -> Result<OutboundEnvelope> {
    let desc = cmd.descriptor();

    let payload = match cmd.payload() {
        Some(Ok(v)) => Some(v),
        Some(Err(e)) => {
            return Err(DeckError::EncodingFailure {
                event: desc.event,
                reason: e.to_string(),
            })
        }
        None => None,
    };

    let context = cmd
        .context()
        .map_or_else(|| identity.to_owned(), |c| c.as_str().to_owned());

    Ok(OutboundEnvelope {
        event: desc.event,
        context,
        action: cmd.action().map(str::to_owned),
        device: cmd.device().map(str::to_owned),
        payload,
    })
}
