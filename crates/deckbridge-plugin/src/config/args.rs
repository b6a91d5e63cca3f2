//! Launch arguments.
//!
//! The host starts the plugin as
//! `plugin -port 28196 -pluginUUID <uuid> -registerEvent registerPlugin -info <json>`.
//! Flags take one or two dashes, and either `-flag value` or `-flag=value`.

use deckbridge_core::error::{DeckError, Result};
use deckbridge_core::protocol::info::RegistrationInfo;

/// The four connection values handed over by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectParams {
    pub port: String,
    pub plugin_uuid: String,
    pub register_event: String,
    /// Raw JSON blob; see [`ConnectParams::registration_info`].
    pub info: String,
}

impl ConnectParams {
    /// Parse from the process arguments (skipping the program name).
    pub fn from_env() -> Result<Self> {
        Self::from_args(std::env::args().skip(1))
    }

    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out = Self::default();
        let mut it = args.into_iter().map(Into::into);

        while let Some(arg) = it.next() {
            let flag = arg
                .strip_prefix("--")
                .or_else(|| arg.strip_prefix('-'))
                .ok_or_else(|| DeckError::InvalidConfig(format!("unexpected argument: {arg}")))?;

            let (name, value) = match flag.split_once('=') {
                Some((n, v)) => (n.to_owned(), v.to_owned()),
                None => {
                    let v = it.next().ok_or_else(|| {
                        DeckError::InvalidConfig(format!("flag needs an argument: -{flag}"))
                    })?;
                    (flag.to_owned(), v)
                }
            };

            let slot = match name.as_str() {
                "port" => &mut out.port,
                "pluginUUID" => &mut out.plugin_uuid,
                "registerEvent" => &mut out.register_event,
                "info" => &mut out.info,
                other => {
                    return Err(DeckError::InvalidConfig(format!(
                        "flag provided but not defined: -{other}"
                    )))
                }
            };
            *slot = value;
        }

        Ok(out)
    }

    /// All four values must be present before dialing.
    pub fn validate(&self) -> Result<()> {
        for (name, v) in [
            ("port", &self.port),
            ("uuid", &self.plugin_uuid),
            ("event", &self.register_event),
            ("info", &self.info),
        ] {
            if v.is_empty() {
                return Err(DeckError::Connection(format!("{name} is empty")));
            }
        }
        self.port_number()?;
        Ok(())
    }

    pub fn port_number(&self) -> Result<u16> {
        self.port
            .parse()
            .map_err(|_| DeckError::Connection(format!("invalid port: {:?}", self.port)))
    }

    pub fn registration_info(&self) -> Result<RegistrationInfo> {
        RegistrationInfo::parse(&self.info)
    }
}
