//! Real-time session manager.
//!
//! [`RealtimeManager`] owns at most one push-channel session at a time,
//! tied to the authenticated user. It spawns a read task per session
//! (connect -> join -> read until closed), merges incoming notifications
//! into the store, and broadcasts [`RealtimeEvent`]s for UI layers.
//!
//! A dropped connection ends the session; the next sign-in (or an
//! explicit reconnect by the caller) starts a fresh one.

use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::{broadcast, RwLock};
use tokio_tungstenite::tungstenite::Message;
use tokio_util::sync::CancellationToken;

use gigboard_core::types::EntityId;
use gigboard_store::Store;

use crate::client::RealtimeClient;
use crate::events::{RealtimeEvent, EVENT_CHANNEL_CAPACITY};
use crate::messages::{parse_message, ServerMessage};

/// Manages the single push-channel session for the signed-in user.
///
/// Created once at application startup; the returned `Arc` is cheap to
/// clone wherever connection control is needed.
pub struct RealtimeManager {
    client: RealtimeClient,
    store: Arc<Store>,
    event_tx: broadcast::Sender<RealtimeEvent>,
    session: RwLock<Option<ActiveSession>>,
}

/// Internal bookkeeping for the running session task.
struct ActiveSession {
    user_id: EntityId,
    task_handle: tokio::task::JoinHandle<()>,
    cancel: CancellationToken,
}

impl RealtimeManager {
    pub fn new(client: RealtimeClient, store: Arc<Store>) -> Arc<Self> {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Arc::new(Self {
            client,
            store,
            event_tx,
            session: RwLock::new(None),
        })
    }

    /// Subscribe to session and notification events.
    pub fn subscribe(&self) -> broadcast::Receiver<RealtimeEvent> {
        self.event_tx.subscribe()
    }

    /// Whether a session task is currently alive.
    pub async fn is_connected(&self) -> bool {
        self.session
            .read()
            .await
            .as_ref()
            .is_some_and(|s| !s.task_handle.is_finished())
    }

    /// Open (or keep) the push session for `user_id`.
    ///
    /// Reconnecting as the same user while the session task is still
    /// alive is a no-op. A different user, or a dead task, replaces the
    /// session.
    pub async fn connect(&self, user_id: &str) {
        let mut session = self.session.write().await;

        if let Some(active) = session.as_ref() {
            if active.user_id == user_id && !active.task_handle.is_finished() {
                tracing::debug!(user_id = %user_id, "Push session already active");
                return;
            }
        }
        if let Some(stale) = session.take() {
            stale.cancel.cancel();
        }

        let cancel = CancellationToken::new();
        let connection = match self.client.connect(user_id).await {
            Ok(connection) => connection,
            Err(e) => {
                tracing::warn!(user_id = %user_id, error = %e, "Push channel unavailable");
                return;
            }
        };

        let store = Arc::clone(&self.store);
        let event_tx = self.event_tx.clone();
        let cancel_clone = cancel.clone();
        let task_handle = tokio::spawn(async move {
            let _ = event_tx.send(RealtimeEvent::Connected);
            run_session(connection.ws_stream, &store, &event_tx, &cancel_clone).await;
            let _ = event_tx.send(RealtimeEvent::Disconnected);
        });

        *session = Some(ActiveSession {
            user_id: user_id.to_string(),
            task_handle,
            cancel,
        });
    }

    /// Close the current session, if any. Waits up to 5 seconds for the
    /// read task to exit cleanly.
    pub async fn disconnect(&self) {
        let Some(active) = self.session.write().await.take() else {
            return;
        };
        tracing::info!(user_id = %active.user_id, "Closing push session");
        active.cancel.cancel();
        let _ = tokio::time::timeout(std::time::Duration::from_secs(5), active.task_handle).await;
    }
}

/// Session read loop: parse frames, merge notifications, broadcast.
///
/// Runs until the WebSocket closes, a receive error occurs, or the
/// cancellation token is triggered.
async fn run_session(
    mut ws_stream: tokio_tungstenite::WebSocketStream<
        tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>,
    >,
    store: &Store,
    event_tx: &broadcast::Sender<RealtimeEvent>,
    cancel: &CancellationToken,
) {
    loop {
        let msg_result = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("Push session cancelled");
                return;
            }
            msg = ws_stream.next() => match msg {
                Some(result) => result,
                None => return, // stream exhausted
            },
        };

        match msg_result {
            Ok(Message::Text(text)) => {
                handle_text_message(&text, store, event_tx).await;
            }
            Ok(Message::Binary(_)) => {
                tracing::trace!("Ignoring binary frame on push channel");
            }
            Ok(Message::Ping(_) | Message::Pong(_)) => {
                // Handled automatically by tungstenite.
            }
            Ok(Message::Close(frame)) => {
                tracing::info!(?frame, "Push channel closed by server");
                return;
            }
            Ok(Message::Frame(_)) => {}
            Err(e) => {
                tracing::error!(error = %e, "Push channel receive error");
                return;
            }
        }
    }
}

/// Dispatch a single parsed text frame.
async fn handle_text_message(
    text: &str,
    store: &Store,
    event_tx: &broadcast::Sender<RealtimeEvent>,
) {
    match parse_message(text) {
        Ok(ServerMessage::Notification(notification)) => {
            // Merge first so a subscriber reacting to the event already
            // sees the updated unread count.
            store.notifications.push(notification.clone()).await;
            let _ = event_tx.send(RealtimeEvent::Notification(notification));
        }
        Err(e) => {
            tracing::warn!(error = %e, raw_message = %text, "Failed to parse push frame");
        }
    }
}
