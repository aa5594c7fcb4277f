//! Application container.
//!
//! [`App`] wires the HTTP backend, the session cache, the store, and the
//! real-time manager together exactly once, then hands out shared
//! references. Sign-in transitions open the push channel; sign-out and
//! shutdown close it.

use std::sync::Arc;

use gigboard_api::{ApiClient, ApiResult};
use gigboard_core::user::{LoginInput, RegisterInput, User};
use gigboard_realtime::{RealtimeClient, RealtimeEvent, RealtimeManager};
use gigboard_store::{FileSession, Store};

use crate::config::ClientConfig;

/// The composed application: one store, one push session.
pub struct App {
    store: Arc<Store>,
    realtime: Arc<RealtimeManager>,
}

impl App {
    /// Build the dependency graph from configuration. No network calls
    /// happen here; [`startup`](Self::startup) performs the first ones.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let backend = Arc::new(ApiClient::new(config.api_url.clone())?);
        let session = Arc::new(FileSession::new(&config.session_file));
        let store = Arc::new(Store::new(backend, session));
        let realtime = RealtimeManager::new(
            RealtimeClient::new(config.ws_url.clone()),
            Arc::clone(&store),
        );

        Ok(Self { store, realtime })
    }

    /// Shared state tree.
    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    /// Subscribe to connection and notification events.
    pub fn alerts(&self) -> tokio::sync::broadcast::Receiver<RealtimeEvent> {
        self.realtime.subscribe()
    }

    /// Re-validate any cached session and, when it holds, open the push
    /// channel and load the initial notification list.
    pub async fn startup(&self) -> Option<User> {
        let user = self.store.auth.check_auth().await?;
        self.realtime.connect(&user.id).await;
        self.store.notifications.fetch_all().await;
        Some(user)
    }

    /// Sign in; on success the push channel is joined as the new user.
    pub async fn login(&self, input: LoginInput) -> Option<User> {
        let user = self.store.auth.login(input).await?;
        self.realtime.connect(&user.id).await;
        Some(user)
    }

    /// Create an account; on success the push channel is joined.
    pub async fn register(&self, input: RegisterInput) -> Option<User> {
        let user = self.store.auth.register(input).await?;
        self.realtime.connect(&user.id).await;
        Some(user)
    }

    /// Sign out. The push session only closes once the server confirmed
    /// the logout; a failed logout leaves the session authenticated.
    pub async fn logout(&self) {
        self.store.auth.logout().await;
        if self.store.auth.current_user().await.is_none() {
            self.realtime.disconnect().await;
        }
    }

    /// Tear down the push session before exit.
    pub async fn shutdown(&self) {
        self.realtime.disconnect().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn new_app_starts_signed_out() {
        let config = ClientConfig {
            api_url: "http://localhost:1/api/".into(),
            ws_url: "ws://localhost:1/ws".into(),
            session_file: std::env::temp_dir()
                .join("gigboard-app-test-absent.json")
                .to_string_lossy()
                .into_owned(),
        };
        let app = App::new(&config).unwrap();
        assert!(app.store().auth.current_user().await.is_none());
    }
}
