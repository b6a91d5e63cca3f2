//! Session read loop.
//!
//! receive -> decode -> dispatch, until the host closes the connection or a
//! fatal error occurs. Undecodable messages are logged and skipped; they only
//! spoil one message, not the session.

use std::sync::Arc;

use deckbridge_core::error::{DeckError, Result};
use deckbridge_core::protocol::event::decode_event;

use crate::dispatch::{Dispatcher, PluginCtx};
use crate::transport::Session;

pub async fn run(session: Arc<Session>, dispatcher: Arc<Dispatcher>) -> Result<()> {
    let ctx = PluginCtx::new(Arc::clone(&session));

    loop {
        let raw = match session.receive_raw().await {
            Ok(v) => v,
            Err(DeckError::Closed) => {
                tracing::info!("host closed the connection");
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let event = match decode_event(raw) {
            Ok(ev) => ev,
            Err(DeckError::UnknownEventKind { event, raw }) => {
                tracing::warn!(%event, %raw, "skipping unknown event");
                continue;
            }
            Err(DeckError::MalformedPayload { event, raw, reason }) => {
                tracing::warn!(%event, %raw, %reason, "skipping malformed event");
                continue;
            }
            Err(e) => return Err(e),
        };

        let name = event.name();
        tracing::debug!(event = name, "dispatch");

        if let Err(e) = dispatcher.dispatch(&ctx, event).await {
            if matches!(e, DeckError::Closed) {
                tracing::info!("host closed the connection");
                return Ok(());
            }
            if e.is_fatal() {
                return Err(e);
            }
            tracing::warn!(event = name, code = e.code().as_str(), error = %e, "handler failed");
        }
    }
}

/// Close the session; a failure here is only worth a warning.
pub async fn shutdown(session: &Session) {
    if let Err(e) = session.close().await {
        tracing::warn!(code = e.code().as_str(), error = %e, "close failed");
    }
}
