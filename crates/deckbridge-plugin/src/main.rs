//! deckbridge demo plugin.
//!
//! Started by the host with `-port -pluginUUID -registerEvent -info`.
//! - Optional `deckbridge.yaml` next to the binary (strict parsing)
//! - Counter action + host log mirroring
//! - Logs go to stderr; `RUST_LOG` overrides `log.filter`

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use deckbridge_core::error::Result;
use deckbridge_plugin::actions::{CounterAction, HostLog};
use deckbridge_plugin::config::{self, ConnectParams};
use deckbridge_plugin::dispatch::Dispatcher;
use deckbridge_plugin::runner;
use deckbridge_plugin::transport::Session;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        tracing::error!(code = e.code().as_str(), error = %e, "plugin stopped");
        eprintln!("deckbridge: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cfg = config::load_or_default("deckbridge.yaml")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log.filter));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let params = ConnectParams::from_env()?;
    match params.registration_info() {
        Ok(info) => tracing::info!(
            platform = %info.application.platform,
            host_version = %info.application.version,
            devices = info.devices.len(),
            "host info"
        ),
        Err(e) => tracing::warn!(error = %e, "could not parse -info"),
    }

    let session = Arc::new(Session::open(&params, &cfg.connection).await?);

    let dispatcher = Dispatcher::new().with_global(Arc::new(HostLog::new()));
    dispatcher.register(Arc::new(CounterAction::new()));
    tracing::info!(actions = ?dispatcher.registered_actions(), "plugin ready");

    let res = runner::run(Arc::clone(&session), Arc::new(dispatcher)).await;
    runner::shutdown(&session).await;
    res
}
