//! Host session over one WebSocket connection.
//!
//! Reader and writer halves sit behind separate locks: one receive and one
//! send may run at the same time, but sends never interleave with each other
//! and neither do receives. There is no retry or reconnection; every
//! transport failure is returned to the caller.

use std::sync::Arc;

use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tokio::time::{timeout, Duration};
use tokio_tungstenite::tungstenite::{self, Message};
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use deckbridge_core::error::{DeckError, Result};
use deckbridge_core::protocol::command::{encode_command, Command, LogMessage};
use deckbridge_core::protocol::envelope::Registration;
use deckbridge_core::protocol::event::{decode_event, Event};

use crate::config::{ConnectParams, ConnectionSection};
use crate::transport::codec::{self, Inbound};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;
type WsWriter = SplitSink<WsStream, Message>;
type WsReader = SplitStream<WsStream>;

pub struct Session {
    identity: Arc<str>,
    writer: Mutex<WsWriter>,
    reader: Mutex<WsReader>,
}

impl Session {
    /// Dial the host and send the registration handshake.
    pub async fn open(params: &ConnectParams, cfg: &ConnectionSection) -> Result<Self> {
        params.validate()?;
        let url = format!("ws://{}:{}", cfg.host, params.port_number()?);
        let limit = Duration::from_millis(cfg.connect_timeout_ms);

        let (stream, _response) = timeout(limit, connect_async(url.as_str()))
            .await
            .map_err(|_| DeckError::Connection(format!("connect to {url} timed out after {limit:?}")))?
            .map_err(|e| DeckError::Connection(format!("failed to connect to {url}: {e}")))?;

        let (writer, reader) = stream.split();
        let session = Self {
            identity: Arc::from(params.plugin_uuid.as_str()),
            writer: Mutex::new(writer),
            reader: Mutex::new(reader),
        };

        let reg = Registration {
            event: &params.register_event,
            uuid: &params.plugin_uuid,
        };
        session
            .write(codec::encode("registration", &reg)?)
            .await
            .map_err(|e| DeckError::Connection(format!("registration failed: {e}")))?;

        tracing::info!(%url, uuid = %session.identity, "registered with host");
        Ok(session)
    }

    /// Plugin UUID, the default context of outbound commands.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Block until the next JSON message arrives. Control frames are skipped.
    pub async fn receive_raw(&self) -> Result<Value> {
        let mut reader = self.reader.lock().await;
        loop {
            let Some(frame) = reader.next().await else {
                return Err(DeckError::Closed);
            };
            let msg = frame.map_err(map_ws_error)?;
            match codec::decode(msg)? {
                Inbound::Json(v) => return Ok(v),
                Inbound::Control => continue,
                Inbound::Close => return Err(DeckError::Closed),
            }
        }
    }

    /// Receive and decode one event.
    pub async fn receive(&self) -> Result<Event> {
        decode_event(self.receive_raw().await?)
    }

    pub async fn send_raw(&self, v: &Value) -> Result<()> {
        self.write(Message::Text(v.to_string())).await
    }

    /// Encode and send one command.
    pub async fn send(&self, cmd: impl Into<Command>) -> Result<()> {
        let cmd = cmd.into();
        let env = encode_command(&cmd, &self.identity)?;
        self.write(codec::encode(env.event, &env)?).await?;
        tracing::debug!(event = env.event, context = %env.context, "sent command");
        Ok(())
    }

    /// Write a line to the host's plugin log.
    pub async fn log(&self, message: impl Into<String>) -> Result<()> {
        self.send(LogMessage::new(message)).await
    }

    pub async fn close(&self) -> Result<()> {
        let mut writer = self.writer.lock().await;
        match writer.close().await {
            Ok(())
            | Err(tungstenite::Error::ConnectionClosed)
            | Err(tungstenite::Error::AlreadyClosed) => Ok(()),
            Err(e) => Err(map_ws_error(e)),
        }
    }

    async fn write(&self, msg: Message) -> Result<()> {
        let mut writer = self.writer.lock().await;
        writer.send(msg).await.map_err(map_ws_error)
    }
}

fn map_ws_error(e: tungstenite::Error) -> DeckError {
    match e {
        tungstenite::Error::ConnectionClosed | tungstenite::Error::AlreadyClosed => DeckError::Closed,
        other => DeckError::Transport(other.to_string()),
    }
}
