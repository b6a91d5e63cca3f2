//! Value objects nested inside event payloads and command payloads.
//!
//! These carry no invariants beyond their field types; a successful serde
//! decode is the only validation.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Per-instance settings blob, always a JSON object on the wire.
pub type Settings = Map<String, Value>;

/// Identifier of one placed action instance (the `context` field).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(String);

impl InstanceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InstanceId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for InstanceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Key position on the device grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Coordinates {
    pub column: u32,
    pub row: u32,
}

/// Device grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Size {
    pub columns: u32,
    pub rows: u32,
}

/// Hardware model, sent as a small integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u8")]
pub enum DeviceType {
    StreamDeck,
    StreamDeckMini,
    StreamDeckXl,
    StreamDeckMobile,
    CorsairGKeys,
    StreamDeckPedal,
    CorsairVoyager,
    StreamDeckPlus,
    ScufController,
    StreamDeckNeo,
}

impl TryFrom<u8> for DeviceType {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Ok(match v {
            0 => DeviceType::StreamDeck,
            1 => DeviceType::StreamDeckMini,
            2 => DeviceType::StreamDeckXl,
            3 => DeviceType::StreamDeckMobile,
            4 => DeviceType::CorsairGKeys,
            5 => DeviceType::StreamDeckPedal,
            6 => DeviceType::CorsairVoyager,
            7 => DeviceType::StreamDeckPlus,
            8 => DeviceType::ScufController,
            9 => DeviceType::StreamDeckNeo,
            other => return Err(format!("unknown device type {other}")),
        })
    }
}

/// Metadata attached to `deviceDidConnect`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeviceInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    pub size: Size,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleAlignment {
    Top,
    Middle,
    Bottom,
}

/// Font and layout of a key title as configured by the user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleParameters {
    pub font_family: String,
    pub font_size: u32,
    pub font_style: String,
    pub font_underline: bool,
    pub show_title: bool,
    pub title_alignment: TitleAlignment,
    pub title_color: String,
}

/// Where a `setTitle` applies. Serialized as its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitleTarget {
    #[default]
    Both,
    Hardware,
    Software,
}

impl TitleTarget {
    pub fn code(self) -> u8 {
        match self {
            TitleTarget::Both => 0,
            TitleTarget::Hardware => 1,
            TitleTarget::Software => 2,
        }
    }
}

impl Serialize for TitleTarget {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u8(self.code())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serde_json::json;

    #[test]
    fn device_type_rejects_out_of_range() {
        let ok: DeviceType = serde_json::from_value(json!(7)).unwrap();
        assert_eq!(ok, DeviceType::StreamDeckPlus);
        assert!(serde_json::from_value::<DeviceType>(json!(42)).is_err());
        assert!(serde_json::from_value::<DeviceType>(json!(-1)).is_err());
    }

    #[test]
    fn alignment_is_a_closed_token_set() {
        let a: TitleAlignment = serde_json::from_value(json!("middle")).unwrap();
        assert_eq!(a, TitleAlignment::Middle);
        assert!(serde_json::from_value::<TitleAlignment>(json!("center")).is_err());
    }

    #[test]
    fn title_target_is_an_integer_on_the_wire() {
        assert_eq!(serde_json::to_value(TitleTarget::Software).unwrap(), json!(2));
    }
}
