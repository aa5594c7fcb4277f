//! Normalized client-side store for the Gigboard marketplace.
//!
//! Each backend resource (auth, gigs, bids, notifications) owns one slice:
//! a pure reducer state guarded by a `tokio::sync::RwLock` plus the async
//! operations that call the backend and reduce the pending / fulfilled /
//! rejected outcomes into flags and data. [`Store`] composes the four
//! slices into the single state tree a view layer consumes.

pub mod auth;
pub mod bids;
pub mod generation;
pub mod gigs;
pub mod notifications;
pub mod session;
pub mod status;
pub mod store;

pub use auth::{AuthSlice, AuthState};
pub use bids::{BidsSlice, BidsState};
pub use gigs::{GigsSlice, GigsState};
pub use notifications::{NotificationsSlice, NotificationsState};
pub use session::{FileSession, MemorySession, SessionStore};
pub use status::OpStatus;
pub use store::Store;
