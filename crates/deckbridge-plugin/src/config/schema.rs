use serde::Deserialize;
use deckbridge_core::error::{DeckError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluginConfig {
    pub version: u32,

    #[serde(default)]
    pub connection: ConnectionSection,

    #[serde(default)]
    pub log: LogSection,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            version: 1,
            connection: ConnectionSection::default(),
            log: LogSection::default(),
        }
    }
}

impl PluginConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(DeckError::InvalidConfig(format!(
                "unsupported config version {}",
                self.version
            )));
        }

        self.connection.validate()?;

        if self.log.filter.trim().is_empty() {
            return Err(DeckError::InvalidConfig("log.filter must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectionSection {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

impl Default for ConnectionSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}

impl ConnectionSection {
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(DeckError::InvalidConfig("connection.host must not be empty".into()));
        }
        if !(100..=60000).contains(&self.connect_timeout_ms) {
            return Err(DeckError::InvalidConfig(
                "connection.connect_timeout_ms must be between 100 and 60000".into(),
            ));
        }
        Ok(())
    }
}

fn default_host() -> String {
    "127.0.0.1".into()
}
fn default_connect_timeout_ms() -> u64 {
    10000
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogSection {
    /// `EnvFilter` directive; `RUST_LOG` wins when set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "info".into()
}
