//! Session persistence boundary.
//!
//! The last-known authenticated identity is cached locally so the
//! application can start with an optimistic placeholder while
//! `auth/check` re-validates against the server. All reads and writes of
//! that cache go through [`SessionStore`]: one load at startup, one
//! save/clear per auth transition — never from inside a reducer.

use std::path::PathBuf;
use std::sync::Mutex;

use gigboard_core::user::User;

/// Storage for the cached session identity.
pub trait SessionStore: Send + Sync {
    /// Read the cached identity, if any. Corrupt or missing caches read
    /// as `None`.
    fn load(&self) -> Option<User>;

    /// Persist the identity after a successful login/register/check.
    fn save(&self, user: &User);

    /// Drop the cache after logout or a failed session re-validation.
    fn clear(&self);
}

// ---------------------------------------------------------------------------
// FileSession
// ---------------------------------------------------------------------------

/// JSON-file-backed session cache (the desktop analog of the original's
/// `localStorage` entry).
pub struct FileSession {
    path: PathBuf,
}

impl FileSession {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for FileSession {
    fn load(&self) -> Option<User> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Discarding corrupt session cache");
                None
            }
        }
    }

    fn save(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&self.path, json) {
                    tracing::warn!(path = %self.path.display(), error = %e, "Failed to persist session cache");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize session cache");
            }
        }
    }

    fn clear(&self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to clear session cache");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// MemorySession
// ---------------------------------------------------------------------------

/// In-memory session store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemorySession {
    user: Mutex<Option<User>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the cache, as if a previous run had saved it.
    pub fn with_user(user: User) -> Self {
        Self {
            user: Mutex::new(Some(user)),
        }
    }
}

impl SessionStore for MemorySession {
    fn load(&self) -> Option<User> {
        self.user.lock().expect("session lock poisoned").clone()
    }

    fn save(&self, user: &User) {
        *self.user.lock().expect("session lock poisoned") = Some(user.clone());
    }

    fn clear(&self) {
        *self.user.lock().expect("session lock poisoned") = None;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
