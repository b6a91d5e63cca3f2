use async_trait::async_trait;
use dashmap::DashMap;

use deckbridge_core::error::Result;
use deckbridge_core::protocol::command::{SetTitle, ShowOk};
use deckbridge_core::protocol::event::Event;
use deckbridge_core::protocol::types::{InstanceId, Settings};

use crate::dispatch::{ActionHandler, PluginCtx};

pub const COUNTER_ACTION: &str = "dev.deckbridge.counter";

/// Counts key presses per placed instance and shows the count as the title.
#[derive(Default)]
pub struct CounterAction {
    counts: DashMap<InstanceId, u32>,
}

impl CounterAction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, ctx: &InstanceId) -> Option<u32> {
        self.counts.get(ctx).map(|c| *c)
    }

    // Guard dropped before returning so callers may await afterwards.
    fn bump(&self, ctx: &InstanceId) -> u32 {
        let mut c = self.counts.entry(ctx.clone()).or_insert(0);
        *c += 1;
        *c
    }
}

/// Starting value stored by the property inspector, if any.
fn initial_count(settings: &Settings) -> u32 {
    settings
        .get("count")
        .and_then(|v| v.as_u64())
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0)
}

#[async_trait]
impl ActionHandler for CounterAction {
    fn action(&self) -> &str {
        COUNTER_ACTION
    }

    async fn handle(&self, ctx: &PluginCtx, event: Event) -> Result<()> {
        match event {
            Event::WillAppear(e) => {
                let n = *self
                    .counts
                    .entry(e.context.clone())
                    .or_insert(initial_count(&e.payload.settings));
                ctx.send(SetTitle::new(e.context, n.to_string())).await
            }
            Event::KeyUp(e) => {
                let n = self.bump(&e.context);
                tracing::debug!(context = %e.context, count = n, "counter bumped");
                ctx.send(SetTitle::new(e.context.clone(), n.to_string())).await?;
                ctx.send(ShowOk { context: e.context }).await
            }
            Event::WillDisappear(e) => {
                self.counts.remove(&e.context);
                Ok(())
            }
            Event::SendToPlugin(e) if e.payload.get("reset").and_then(|v| v.as_bool()) == Some(true) => {
                self.counts.insert(e.context.clone(), 0);
                ctx.send(SetTitle::new(e.context, "0")).await
            }
            _ => Ok(()),
        }
    }
}
