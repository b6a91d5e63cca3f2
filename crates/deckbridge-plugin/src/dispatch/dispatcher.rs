use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use deckbridge_core::error::Result;
use deckbridge_core::protocol::event::Event;

use crate::dispatch::PluginCtx;

/// Handler for one action UUID declared in the plugin manifest.
#[async_trait]
pub trait ActionHandler: Send + Sync {
    fn action(&self) -> &str;
    async fn handle(&self, ctx: &PluginCtx, event: Event) -> Result<()>;
}

/// Handler for events not tied to an action (devices, applications,
/// global settings, wake-up).
#[async_trait]
pub trait GlobalHandler: Send + Sync {
    async fn handle(&self, ctx: &PluginCtx, event: Event) -> Result<()>;
}

/// Routes decoded events by action UUID.
#[derive(Default)]
pub struct Dispatcher {
    actions: DashMap<String, Arc<dyn ActionHandler>>,
    global: Option<Arc<dyn GlobalHandler>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_global(mut self, handler: Arc<dyn GlobalHandler>) -> Self {
        self.global = Some(handler);
        self
    }

    pub fn register(&self, handler: Arc<dyn ActionHandler>) {
        self.actions.insert(handler.action().to_owned(), handler);
    }

    pub fn registered_actions(&self) -> Vec<String> {
        self.actions.iter().map(|e| e.key().clone()).collect()
    }

    /// Events for an action nobody registered are dropped with a warning.
    pub async fn dispatch(&self, ctx: &PluginCtx, event: Event) -> Result<()> {
        match event.action().map(str::to_owned) {
            Some(action) => {
                // Clone out of the map so no shard lock is held across await.
                let handler = self.actions.get(&action).map(|e| Arc::clone(e.value()));
                match handler {
                    Some(h) => h.handle(ctx, event).await,
                    None => {
                        tracing::warn!(%action, event = event.name(), "no handler for action");
                        Ok(())
                    }
                }
            }
            None => match &self.global {
                Some(h) => h.handle(ctx, event).await,
                None => {
                    tracing::debug!(event = event.name(), "unhandled global event");
                    Ok(())
                }
            },
        }
    }
}
