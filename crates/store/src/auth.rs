//! Auth slice: session identity plus request-lifecycle flags.
//!
//! The reducer methods on [`AuthState`] are pure; [`AuthSlice`] owns the
//! async operations that call the backend and apply them. Session-cache
//! writes happen at the operation level, next to the state transition they
//! belong to, so the in-memory identity and the persisted cache never
//! disagree.

use std::sync::Arc;

use tokio::sync::RwLock;

use gigboard_api::MarketplaceBackend;
use gigboard_core::user::{LoginInput, RegisterInput, User};

use crate::session::SessionStore;
use crate::status::OpStatus;

/// State owned by the auth slice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    /// Last-known authenticated identity; `None` when signed out.
    pub user: Option<User>,
    pub status: OpStatus,
}

impl AuthState {
    /// A login/register/check succeeded with `user` as the session subject.
    pub fn auth_fulfilled(&mut self, user: User) {
        self.status.succeed();
        self.user = Some(user);
    }

    /// A login/register attempt was rejected.
    pub fn auth_rejected(&mut self, message: String) {
        self.status.fail(message);
        self.user = None;
    }

    /// The server confirmed the logout.
    pub fn logout_fulfilled(&mut self) {
        self.status.succeed();
        self.user = None;
    }

    /// The session re-validation failed; the identity is gone. No error
    /// flags are raised: an expired cookie at startup is not a failure the
    /// user acted to cause, so nothing should banner.
    pub fn check_rejected(&mut self) {
        self.status.settle();
        self.user = None;
    }

    /// Clear status flags without touching the identity.
    pub fn reset(&mut self) {
        self.status.reset();
    }
}

/// Auth resource slice.
pub struct AuthSlice {
    state: RwLock<AuthState>,
    backend: Arc<dyn MarketplaceBackend>,
    session: Arc<dyn SessionStore>,
}

impl AuthSlice {
    /// Create the slice, hydrating the identity from the session cache as
    /// an optimistic placeholder pending [`check_auth`](Self::check_auth).
    pub fn new(backend: Arc<dyn MarketplaceBackend>, session: Arc<dyn SessionStore>) -> Self {
        let state = AuthState {
            user: session.load(),
            status: OpStatus::default(),
        };
        Self {
            state: RwLock::new(state),
            backend,
            session,
        }
    }

    /// Clone of the current state for rendering.
    pub async fn snapshot(&self) -> AuthState {
        self.state.read().await.clone()
    }

    /// Currently authenticated user, if any.
    pub async fn current_user(&self) -> Option<User> {
        self.state.read().await.user.clone()
    }

    /// Clear status flags (called before mount-driven refetches and on
    /// unmount so stale banners do not reappear).
    pub async fn reset(&self) {
        self.state.write().await.reset();
    }

    /// `POST auth/register`. Returns the new identity on success.
    pub async fn register(&self, input: RegisterInput) -> Option<User> {
        if let Err(errors) = input.validate() {
            self.state.write().await.status.fail(errors.to_string());
            return None;
        }
        self.state.write().await.status.begin();
        match self.backend.register(&input).await {
            Ok(user) => {
                self.session.save(&user);
                self.state.write().await.auth_fulfilled(user.clone());
                tracing::info!(user_id = %user.id, "Registered new account");
                Some(user)
            }
            Err(e) => {
                self.state.write().await.auth_rejected(e.user_message());
                None
            }
        }
    }

    /// `POST auth/login`. Returns the identity on success.
    pub async fn login(&self, input: LoginInput) -> Option<User> {
        if let Err(errors) = input.validate() {
            self.state.write().await.status.fail(errors.to_string());
            return None;
        }
        self.state.write().await.status.begin();
        match self.backend.login(&input).await {
            Ok(user) => {
                self.session.save(&user);
                self.state.write().await.auth_fulfilled(user.clone());
                tracing::info!(user_id = %user.id, "Logged in");
                Some(user)
            }
            Err(e) => {
                self.state.write().await.auth_rejected(e.user_message());
                None
            }
        }
    }

    /// `POST auth/logout`. Clears the identity and the session cache on
    /// success; on failure both are kept (server and client still agree).
    pub async fn logout(&self) {
        self.state.write().await.status.begin();
        match self.backend.logout().await {
            Ok(()) => {
                self.session.clear();
                self.state.write().await.logout_fulfilled();
                tracing::info!("Logged out");
            }
            Err(e) => {
                self.state.write().await.status.fail(e.user_message());
            }
        }
    }

    /// `GET auth/check`: re-validate the session cookie. On success the
    /// cache is refreshed; on rejection both the in-memory identity and
    /// the cache are dropped.
    pub async fn check_auth(&self) -> Option<User> {
        self.state.write().await.status.begin();
        match self.backend.check_auth().await {
            Ok(user) => {
                self.session.save(&user);
                self.state.write().await.auth_fulfilled(user.clone());
                Some(user)
            }
            Err(e) => {
                self.session.clear();
                self.state.write().await.check_rejected();
                tracing::debug!(error = %e, "Session re-validation failed");
                None
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests (pure reducers; operation flows live in tests/slice_scenarios.rs)
// ---------------------------------------------------------------------------
