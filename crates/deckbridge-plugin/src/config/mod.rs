//! Plugin config: launch arguments plus an optional YAML file (strict parsing).

pub mod args;
pub mod schema;

use std::fs;
use std::path::Path;

use deckbridge_core::error::{DeckError, Result};

pub use args::ConnectParams;
pub use schema::{ConnectionSection, LogSection, PluginConfig};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<PluginConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path)
        .map_err(|e| DeckError::InvalidConfig(format!("read {} failed: {e}", path.display())))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<PluginConfig> {
    let cfg: PluginConfig = serde_yaml::from_str(s)
        .map_err(|e| DeckError::InvalidConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path` if it exists, otherwise defaults.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<PluginConfig> {
    let path = path.as_ref();
    if path.exists() {
        load_from_file(path)
    } else {
        Ok(PluginConfig::default())
    }
}
