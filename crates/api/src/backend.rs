//! Backend trait seam.
//!
//! Every REST operation the client consumes, as an object-safe async
//! trait. The store layer depends on `Arc<dyn MarketplaceBackend>` so its
//! slices can be driven by an in-memory fake in tests, and so the HTTP
//! binding stays swappable.

use async_trait::async_trait;
use serde::Deserialize;

use gigboard_core::bid::{Bid, CreateBidInput};
use gigboard_core::gig::{CreateGigInput, Gig, GigFilters, GigStatus};
use gigboard_core::notification::Notification;
use gigboard_core::user::{LoginInput, RegisterInput, User};

use crate::error::ApiResult;

/// Response of `POST bids/:bidId/hire`; the updated bid is nested under
/// a `bid` key next to a human-readable confirmation.
#[derive(Debug, Clone, Deserialize)]
pub struct HireResponse {
    pub bid: Bid,
    #[serde(default)]
    pub message: Option<String>,
}

/// The full backend surface consumed by the client.
#[async_trait]
pub trait MarketplaceBackend: Send + Sync {
    // ---- auth ----

    async fn register(&self, input: &RegisterInput) -> ApiResult<User>;
    async fn login(&self, input: &LoginInput) -> ApiResult<User>;
    async fn logout(&self) -> ApiResult<()>;
    /// Re-validate the session cookie; succeeds with the current identity.
    async fn check_auth(&self) -> ApiResult<User>;

    // ---- gigs ----

    async fn list_gigs(&self, filters: &GigFilters) -> ApiResult<Vec<Gig>>;
    async fn get_gig(&self, gig_id: &str) -> ApiResult<Gig>;
    /// Gigs owned by the authenticated user.
    async fn my_gigs(&self) -> ApiResult<Vec<Gig>>;
    async fn create_gig(&self, input: &CreateGigInput) -> ApiResult<Gig>;
    async fn update_gig_status(&self, gig_id: &str, status: GigStatus) -> ApiResult<Gig>;

    // ---- bids ----

    async fn create_bid(&self, input: &CreateBidInput) -> ApiResult<Bid>;
    /// Bids placed against one gig (owner view).
    async fn gig_bids(&self, gig_id: &str) -> ApiResult<Vec<Bid>>;
    /// Bids placed by the authenticated user.
    async fn my_bids(&self) -> ApiResult<Vec<Bid>>;
    async fn hire_bid(&self, bid_id: &str) -> ApiResult<HireResponse>;

    // ---- notifications ----

    async fn notifications(&self) -> ApiResult<Vec<Notification>>;
    async fn mark_read(&self, notification_id: &str) -> ApiResult<Notification>;
    async fn mark_all_read(&self) -> ApiResult<()>;
}
