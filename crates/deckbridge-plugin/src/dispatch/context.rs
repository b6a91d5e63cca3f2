use std::sync::Arc;

use deckbridge_core::error::Result;
use deckbridge_core::protocol::command::Command;

use crate::transport::Session;

/// Per-event context passed to handlers (borrow the session instead of owning it).
#[derive(Clone)]
pub struct PluginCtx {
    session: Arc<Session>,
}

impl PluginCtx {
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    pub fn identity(&self) -> &str {
        self.session.identity()
    }

    pub async fn send(&self, cmd: impl Into<Command>) -> Result<()> {
        self.session.send(cmd).await
    }

    pub async fn log(&self, message: impl Into<String>) -> Result<()> {
        self.session.log(message).await
    }
}
