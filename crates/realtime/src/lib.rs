//! Real-time notification channel for the Gigboard marketplace.
//!
//! The backend pushes notifications over a WebSocket once a connection
//! has joined under a user id. This crate owns that channel end to end:
//! wire [`messages`], the joined [`client`], and the [`manager`] that
//! runs the session task, merges pushes into the store, and broadcasts
//! [`RealtimeEvent`]s.

pub mod client;
pub mod events;
pub mod manager;
pub mod messages;

pub use client::{RealtimeClient, RealtimeConnection, RealtimeError};
pub use events::RealtimeEvent;
pub use manager::RealtimeManager;
pub use messages::{parse_message, ClientMessage, ServerMessage};
