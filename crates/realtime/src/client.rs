//! WebSocket client for the notification push channel.
//!
//! [`RealtimeClient`] holds the endpoint configuration. Call
//! [`RealtimeClient::connect`] to establish a live [`RealtimeConnection`]
//! joined under a user id.

use futures::SinkExt;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream};

use gigboard_core::types::EntityId;

use crate::messages::ClientMessage;

/// Configuration handle for the push endpoint.
pub struct RealtimeClient {
    ws_url: String,
}

/// A live, joined WebSocket connection.
pub struct RealtimeConnection {
    /// The user id this connection is joined under.
    pub user_id: EntityId,
    /// The raw WebSocket stream for reading/writing frames.
    pub ws_stream: tokio_tungstenite::WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>,
}

impl RealtimeClient {
    /// Create a client targeting a push endpoint, e.g. `ws://host:5000/ws`.
    pub fn new(ws_url: impl Into<String>) -> Self {
        Self {
            ws_url: ws_url.into(),
        }
    }

    /// WebSocket endpoint URL.
    pub fn ws_url(&self) -> &str {
        &self.ws_url
    }

    /// Connect and immediately send the join frame for `user_id`.
    ///
    /// The server only routes notifications to connections that have
    /// joined, so an unjoined connection is useless and is not exposed.
    pub async fn connect(&self, user_id: &str) -> Result<RealtimeConnection, RealtimeError> {
        let (mut ws_stream, _response) = connect_async(&self.ws_url).await.map_err(|e| {
            RealtimeError::Connection(format!("Failed to connect to {}: {e}", self.ws_url))
        })?;

        let join = ClientMessage::Join(user_id.to_string())
            .to_frame()
            .map_err(|e| RealtimeError::Protocol(format!("Failed to encode join frame: {e}")))?;
        ws_stream
            .send(Message::Text(join))
            .await
            .map_err(|e| RealtimeError::Protocol(format!("Failed to send join frame: {e}")))?;

        tracing::info!(user_id = %user_id, "Joined push channel at {}", self.ws_url);

        Ok(RealtimeConnection {
            user_id: user_id.to_string(),
            ws_stream,
        })
    }
}

/// Errors that can occur when working with the push channel.
#[derive(Debug, thiserror::Error)]
pub enum RealtimeError {
    /// Failed to establish the initial WebSocket connection.
    #[error("Connection error: {0}")]
    Connection(String),

    /// A protocol-level error on an already-established connection.
    #[error("Protocol error: {0}")]
    Protocol(String),
}
