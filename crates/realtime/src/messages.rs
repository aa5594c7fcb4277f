//! Real-time channel message types and parser.
//!
//! The server pushes JSON messages over WebSocket with the shape
//! `{"event": "<name>", "data": {...}}`, and expects the same envelope
//! on frames the client sends. This module deserializes incoming frames
//! into a strongly-typed [`ServerMessage`] enum and serializes outgoing
//! [`ClientMessage`] frames.

use serde::{Deserialize, Serialize};

use gigboard_core::notification::Notification;
use gigboard_core::types::EntityId;

/// Messages the client sends to the push server.
///
/// Serialized via the internally-tagged `"event"` field with associated
/// `"data"` content.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "data")]
pub enum ClientMessage {
    /// Register this connection under a user id so the server can route
    /// that user's notifications to it. Sent once, right after connect.
    #[serde(rename = "join")]
    Join(EntityId),
}

impl ClientMessage {
    /// Encode as the text frame the server expects.
    pub fn to_frame(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// All known server-pushed message types.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum ServerMessage {
    /// A notification addressed to the joined user.
    #[serde(rename = "notification")]
    Notification(Notification),
}

/// Parse a server text frame into a typed enum.
///
/// Returns `Err` for malformed JSON or unknown `event` values.
/// Callers should log unknown events and continue reading.
pub fn parse_message(text: &str) -> Result<ServerMessage, serde_json::Error> {
    serde_json::from_str(text)
}
