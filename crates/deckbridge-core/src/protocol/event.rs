//! Inbound events (host -> plugin).
//!
//! Each variant struct derives `Deserialize` in its exact wire layout, so the
//! field placement of a variant is visible in its definition:
//! - payload-nested variants keep identity fields (`action`, `context`,
//!   `device`) at the top level and semantic fields under `payload`;
//! - flat variants read everything from the top level (`deviceDidConnect`
//!   reads its metadata from the named `deviceInfo` field, not `payload`).
//!
//! Unknown fields are ignored at every level so newer hosts keep working.
//!
//! [`decode_event`] looks the discriminator up in a single registry table.
//! Adding a variant means one struct, one [`Event`] arm, one registry row.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{DeckError, Result};
use crate::protocol::envelope::discriminator;
use crate::protocol::types::{Coordinates, DeviceInfo, InstanceId, Settings, TitleParameters};

// --------------------
// Shared payloads
// --------------------

/// Payload of `didReceiveSettings`, `willAppear` and `willDisappear`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstancePayload {
    pub settings: Settings,
    /// Absent for instances placed inside a multi-action.
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub state: u32,
    pub is_in_multi_action: bool,
}

/// Payload of `keyDown` and `keyUp`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPayload {
    pub settings: Settings,
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub state: u32,
    /// Only sent when the key sits in a multi-action.
    pub user_desired_state: Option<u32>,
    pub is_in_multi_action: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitlePayload {
    pub settings: Settings,
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub state: u32,
    pub title: String,
    pub title_parameters: TitleParameters,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApplicationPayload {
    /// Bundle id / executable name of the monitored application.
    pub application: String,
}

// --------------------
// Variants
// --------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DidReceiveSettings {
    pub action: String,
    pub context: InstanceId,
    pub device: String,
    pub payload: InstancePayload,
}

/// The whole payload is kept; `settings` is the documented key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DidReceiveGlobalSettings {
    #[serde(default)]
    pub payload: Value,
}

impl DidReceiveGlobalSettings {
    /// `payload.settings`, when the host sent an object there.
    pub fn settings(&self) -> Option<&Settings> {
        self.payload.get("settings").and_then(Value::as_object)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KeyDown {
    pub action: String,
    pub context: InstanceId,
    pub device: String,
    pub payload: KeyPayload,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KeyUp {
    pub action: String,
    pub context: InstanceId,
    pub device: String,
    pub payload: KeyPayload,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WillAppear {
    pub action: String,
    pub context: InstanceId,
    pub device: String,
    pub payload: InstancePayload,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WillDisappear {
    pub action: String,
    pub context: InstanceId,
    pub device: String,
    pub payload: InstancePayload,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TitleParametersDidChange {
    pub action: String,
    pub context: InstanceId,
    pub device: String,
    pub payload: TitlePayload,
}

/// Flat: device id at the top level, metadata under `deviceInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDidConnect {
    pub device: String,
    pub device_info: Option<DeviceInfo>,
}

/// Flat.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeviceDidDisconnect {
    pub device: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApplicationDidLaunch {
    pub payload: ApplicationPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApplicationDidTerminate {
    pub payload: ApplicationPayload,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SystemDidWakeUp {}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PropertyInspectorDidAppear {
    pub action: String,
    pub context: InstanceId,
    pub device: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PropertyInspectorDidDisappear {
    pub action: String,
    pub context: InstanceId,
    pub device: Option<String>,
}

/// Message from the property inspector. The payload is opaque to the codec.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SendToPlugin {
    pub action: String,
    pub context: InstanceId,
    /// `null` when the inspector sent nothing.
    #[serde(default)]
    pub payload: Value,
}

/// Decoded inbound event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    DidReceiveSettings(DidReceiveSettings),
    DidReceiveGlobalSettings(DidReceiveGlobalSettings),
    KeyDown(KeyDown),
    KeyUp(KeyUp),
    WillAppear(WillAppear),
    WillDisappear(WillDisappear),
    TitleParametersDidChange(TitleParametersDidChange),
    DeviceDidConnect(DeviceDidConnect),
    DeviceDidDisconnect(DeviceDidDisconnect),
    ApplicationDidLaunch(ApplicationDidLaunch),
    ApplicationDidTerminate(ApplicationDidTerminate),
    SystemDidWakeUp(SystemDidWakeUp),
    PropertyInspectorDidAppear(PropertyInspectorDidAppear),
    PropertyInspectorDidDisappear(PropertyInspectorDidDisappear),
    SendToPlugin(SendToPlugin),
}

impl Event {
    /// Wire discriminator of this variant.
    pub fn name(&self) -> &'static str {
        match self {
            Event::DidReceiveSettings(_) => "didReceiveSettings",
            Event::DidReceiveGlobalSettings(_) => "didReceiveGlobalSettings",
            Event::KeyDown(_) => "keyDown",
            Event::KeyUp(_) => "keyUp",
            Event::WillAppear(_) => "willAppear",
            Event::WillDisappear(_) => "willDisappear",
            Event::TitleParametersDidChange(_) => "titleParametersDidChange",
            Event::DeviceDidConnect(_) => "deviceDidConnect",
            Event::DeviceDidDisconnect(_) => "deviceDidDisconnect",
            Event::ApplicationDidLaunch(_) => "applicationDidLaunch",
            Event::ApplicationDidTerminate(_) => "applicationDidTerminate",
            Event::SystemDidWakeUp(_) => "systemDidWakeUp",
            Event::PropertyInspectorDidAppear(_) => "propertyInspectorDidAppear",
            Event::PropertyInspectorDidDisappear(_) => "propertyInspectorDidDisappear",
            Event::SendToPlugin(_) => "sendToPlugin",
        }
    }

    /// Action UUID, for events addressed to an action instance.
    pub fn action(&self) -> Option<&str> {
        match self {
            Event::DidReceiveSettings(e) => Some(e.action.as_str()),
            Event::KeyDown(e) => Some(e.action.as_str()),
            Event::KeyUp(e) => Some(e.action.as_str()),
            Event::WillAppear(e) => Some(e.action.as_str()),
            Event::WillDisappear(e) => Some(e.action.as_str()),
            Event::TitleParametersDidChange(e) => Some(e.action.as_str()),
            Event::PropertyInspectorDidAppear(e) => Some(e.action.as_str()),
            Event::PropertyInspectorDidDisappear(e) => Some(e.action.as_str()),
            Event::SendToPlugin(e) => Some(e.action.as_str()),
            Event::DidReceiveGlobalSettings(_)
            | Event::DeviceDidConnect(_)
            | Event::DeviceDidDisconnect(_)
            | Event::ApplicationDidLaunch(_)
            | Event::ApplicationDidTerminate(_)
            | Event::SystemDidWakeUp(_) => None,
        }
    }

    /// Instance the event concerns, if any.
    pub fn context(&self) -> Option<&InstanceId> {
        match self {
            Event::DidReceiveSettings(e) => Some(&e.context),
            Event::KeyDown(e) => Some(&e.context),
            Event::KeyUp(e) => Some(&e.context),
            Event::WillAppear(e) => Some(&e.context),
            Event::WillDisappear(e) => Some(&e.context),
            Event::TitleParametersDidChange(e) => Some(&e.context),
            Event::PropertyInspectorDidAppear(e) => Some(&e.context),
            Event::PropertyInspectorDidDisappear(e) => Some(&e.context),
            Event::SendToPlugin(e) => Some(&e.context),
            Event::DidReceiveGlobalSettings(_)
            | Event::DeviceDidConnect(_)
            | Event::DeviceDidDisconnect(_)
            | Event::ApplicationDidLaunch(_)
            | Event::ApplicationDidTerminate(_)
            | Event::SystemDidWakeUp(_) => None,
        }
    }

    pub fn device(&self) -> Option<&str> {
        match self {
            Event::DidReceiveSettings(e) => Some(e.device.as_str()),
            Event::KeyDown(e) => Some(e.device.as_str()),
            Event::KeyUp(e) => Some(e.device.as_str()),
            Event::WillAppear(e) => Some(e.device.as_str()),
            Event::WillDisappear(e) => Some(e.device.as_str()),
            Event::TitleParametersDidChange(e) => Some(e.device.as_str()),
            Event::DeviceDidConnect(e) => Some(e.device.as_str()),
            Event::DeviceDidDisconnect(e) => Some(e.device.as_str()),
            Event::PropertyInspectorDidAppear(e) => e.device.as_deref(),
            Event::PropertyInspectorDidDisappear(e) => e.device.as_deref(),
            Event::DidReceiveGlobalSettings(_)
            | Event::ApplicationDidLaunch(_)
            | Event::ApplicationDidTerminate(_)
            | Event::SystemDidWakeUp(_)
            | Event::SendToPlugin(_) => None,
        }
    }
}

// --------------------
// Registry
// --------------------

type DecodeFn = fn(&Value) -> serde_json::Result<Event>;

fn variant<T: DeserializeOwned>(raw: &Value, wrap: fn(T) -> Event) -> serde_json::Result<Event> {
    T::deserialize(raw).map(wrap)
}

/// Discriminator -> decoder. Keep in sync with [`Event::name`].
static REGISTRY: &[(&str, DecodeFn)] = &[
    ("didReceiveSettings", |raw| variant(raw, Event::DidReceiveSettings)),
    ("didReceiveGlobalSettings", |raw| variant(raw, Event::DidReceiveGlobalSettings)),
    ("keyDown", |raw| variant(raw, Event::KeyDown)),
    ("keyUp", |raw| variant(raw, Event::KeyUp)),
    ("willAppear", |raw| variant(raw, Event::WillAppear)),
    ("willDisappear", |raw| variant(raw, Event::WillDisappear)),
    ("titleParametersDidChange", |raw| variant(raw, Event::TitleParametersDidChange)),
    ("deviceDidConnect", |raw| variant(raw, Event::DeviceDidConnect)),
    ("deviceDidDisconnect", |raw| variant(raw, Event::DeviceDidDisconnect)),
    ("applicationDidLaunch", |raw| variant(raw, Event::ApplicationDidLaunch)),
    ("applicationDidTerminate", |raw| variant(raw, Event::ApplicationDidTerminate)),
    ("systemDidWakeUp", |raw| variant(raw, Event::SystemDidWakeUp)),
    ("propertyInspectorDidAppear", |raw| variant(raw, Event::PropertyInspectorDidAppear)),
    ("propertyInspectorDidDisappear", |raw| variant(raw, Event::PropertyInspectorDidDisappear)),
    ("sendToPlugin", |raw| variant(raw, Event::SendToPlugin)),
];

/// All discriminators the decoder understands, in registry order.
pub const EVENT_NAMES: &[&str] = &[
    "didReceiveSettings",
    "didReceiveGlobalSettings",
    "keyDown",
    "keyUp",
    "willAppear",
    "willDisappear",
    "titleParametersDidChange",
    "deviceDidConnect",
    "deviceDidDisconnect",
    "applicationDidLaunch",
    "applicationDidTerminate",
    "systemDidWakeUp",
    "propertyInspectorDidAppear",
    "propertyInspectorDidDisappear",
    "sendToPlugin",
];

fn lookup(name: &str) -> Option<DecodeFn> {
    REGISTRY
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, decode)| *decode)
}

/// Decode one inbound envelope into a typed event.
///
/// The raw envelope is moved into the error on failure so callers can log
/// exactly what the host sent.
pub fn decode_event(raw: Value) -> Result<Event> {
    let name = match discriminator(&raw) {
        Some(n) if !n.is_empty() => n.to_owned(),
        _ => {
            return Err(DeckError::MalformedPayload {
                event: String::new(),
                raw,
                reason: "missing event discriminator".into(),
            })
        }
    };

    let Some(decode) = lookup(&name) else {
        return Err(DeckError::UnknownEventKind { event: name, raw });
    };

    match decode(&raw) {
        Ok(ev) => {
            tracing::trace!(event = %name, "decoded event");
            Ok(ev)
        }
        Err(e) => Err(DeckError::MalformedPayload {
            event: name,
            raw,
            reason: e.to_string(),
        }),
    }
}

/// Parse text and decode. Invalid JSON is reported as a malformed envelope.
pub fn decode_event_str(s: &str) -> Result<Event> {
    let raw: Value = serde_json::from_str(s).map_err(|e| DeckError::MalformedPayload {
        event: String::new(),
        raw: Value::Null,
        reason: format!("invalid envelope json: {e}"),
    })?;
    decode_event(raw)
}
