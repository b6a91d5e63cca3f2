use async_trait::async_trait;

use deckbridge_core::error::Result;
use deckbridge_core::protocol::event::Event;

use crate::dispatch::{GlobalHandler, PluginCtx};

/// Mirrors device and application lifecycle events into the host log.
#[derive(Default)]
pub struct HostLog;

impl HostLog {
    pub fn new() -> Self {
        Self
    }
}

fn describe(event: &Event) -> Option<String> {
    match event {
        Event::DeviceDidConnect(e) => Some(match &e.device_info {
            Some(info) => format!(
                "device {} connected: {} ({}x{})",
                e.device, info.name, info.size.columns, info.size.rows
            ),
            None => format!("device {} connected", e.device),
        }),
        Event::DeviceDidDisconnect(e) => Some(format!("device {} disconnected", e.device)),
        Event::ApplicationDidLaunch(e) => Some(format!("{} launched", e.payload.application)),
        Event::ApplicationDidTerminate(e) => {
            Some(format!("{} terminated", e.payload.application))
        }
        Event::SystemDidWakeUp(_) => Some("system woke up".into()),
        _ => None,
    }
}

#[async_trait]
impl GlobalHandler for HostLog {
    async fn handle(&self, ctx: &PluginCtx, event: Event) -> Result<()> {
        match describe(&event) {
            Some(line) => {
                tracing::info!(event = event.name(), "{line}");
                ctx.log(line).await
            }
            None => Ok(()),
        }
    }
}
