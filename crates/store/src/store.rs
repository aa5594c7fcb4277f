//! The composed state tree.

use std::sync::Arc;

use gigboard_api::MarketplaceBackend;

use crate::auth::AuthSlice;
use crate::bids::BidsSlice;
use crate::gigs::GigsSlice;
use crate::notifications::NotificationsSlice;
use crate::session::SessionStore;

/// One addressable state tree composed of the four resource slices.
///
/// Constructed once at application start (the slices share the backend and
/// the session boundary) and handed out as `Arc<Store>`; each slice reduces
/// into its own lock, so concurrent operations on different resources never
/// contend.
pub struct Store {
    pub auth: AuthSlice,
    pub gigs: GigsSlice,
    pub bids: BidsSlice,
    pub notifications: NotificationsSlice,
}

impl Store {
    pub fn new(backend: Arc<dyn MarketplaceBackend>, session: Arc<dyn SessionStore>) -> Self {
        Self {
            auth: AuthSlice::new(Arc::clone(&backend), session),
            gigs: GigsSlice::new(Arc::clone(&backend)),
            bids: BidsSlice::new(Arc::clone(&backend)),
            notifications: NotificationsSlice::new(backend),
        }
    }
}
