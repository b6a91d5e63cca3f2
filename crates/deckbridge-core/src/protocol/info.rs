//! Typed view of the `-info` launch argument.
//!
//! The host passes a JSON blob describing itself, the plugin and the
//! attached devices. Only the commonly used parts are typed; anything else is
//! ignored.

use serde::Deserialize;

use crate::error::{DeckError, Result};
use crate::protocol::types::{DeviceType, Size};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInfo {
    pub application: ApplicationInfo,
    pub plugin: PluginInfo,
    #[serde(default = "default_pixel_ratio")]
    pub device_pixel_ratio: u32,
    #[serde(default)]
    pub devices: Vec<RegisteredDevice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationInfo {
    #[serde(default)]
    pub language: String,
    /// `mac` or `windows`.
    pub platform: String,
    #[serde(default)]
    pub platform_version: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PluginInfo {
    #[serde(default)]
    pub uuid: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisteredDevice {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub size: Size,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
}

fn default_pixel_ratio() -> u32 {
    1
}

impl RegistrationInfo {
    pub fn parse(s: &str) -> Result<Self> {
        serde_json::from_str(s)
            .map_err(|e| DeckError::InvalidConfig(format!("invalid info json: {e}")))
    }
}
