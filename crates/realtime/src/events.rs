//! Application-level events emitted by the real-time session.

use gigboard_core::notification::Notification;

/// Broadcast channel capacity for real-time events.
pub const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Events a UI layer can subscribe to for toasts and connection badges.
#[derive(Debug, Clone)]
pub enum RealtimeEvent {
    /// The push channel is established and joined.
    Connected,

    /// The push channel closed (server-side or during disconnect).
    Disconnected,

    /// A notification arrived for the joined user. The store has already
    /// merged it by the time this event is observed.
    Notification(Notification),
}
