//! Bids slice: bid list plus request-lifecycle flags.
//!
//! Creation deliberately does not insert the new bid locally — a
//! freelancer submits and sees a success message; the list only fills in
//! when an owner (or the freelancer's own-bids view) fetches it.

use std::sync::Arc;

use tokio::sync::RwLock;

use gigboard_api::MarketplaceBackend;
use gigboard_core::bid::{Bid, CreateBidInput};

use crate::generation::{Generation, GenerationCounter};
use crate::status::OpStatus;

/// State owned by the bids slice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BidsState {
    /// Most recently fetched bid list (one gig's bids, or the
    /// freelancer's own, depending on the last fetch).
    pub bids: Vec<Bid>,
    pub status: OpStatus,
    list_gen: GenerationCounter,
}

impl BidsState {
    pub fn begin_list_fetch(&mut self) -> Generation {
        self.status.begin_fresh();
        self.list_gen.begin()
    }

    pub fn list_fulfilled(&mut self, generation: Generation, bids: Vec<Bid>) {
        if !self.list_gen.is_current(generation) {
            tracing::debug!("Discarding stale bid list response");
            return;
        }
        self.status.settle();
        self.bids = bids;
    }

    pub fn list_rejected(&mut self, generation: Generation, message: String) {
        if !self.list_gen.is_current(generation) {
            return;
        }
        self.status.fail(message);
    }

    /// A bid was created server-side; only the success flag changes here.
    pub fn create_fulfilled(&mut self) {
        self.status.succeed();
    }

    /// A hire succeeded: replace the matching entry with the updated bid
    /// from the response. Sibling bids are expected to flip to rejected on
    /// the server; a follow-up fetch is what reflects that locally.
    pub fn hire_fulfilled(&mut self, bid: Bid) {
        self.status.succeed();
        if let Some(entry) = self.bids.iter_mut().find(|b| b.id == bid.id) {
            *entry = bid;
        }
    }

    /// Clear status flags and the transient list.
    pub fn reset(&mut self) {
        self.status.reset();
        self.bids.clear();
    }
}

/// Bids resource slice.
pub struct BidsSlice {
    state: RwLock<BidsState>,
    backend: Arc<dyn MarketplaceBackend>,
}

impl BidsSlice {
    pub fn new(backend: Arc<dyn MarketplaceBackend>) -> Self {
        Self {
            state: RwLock::new(BidsState::default()),
            backend,
        }
    }

    pub async fn snapshot(&self) -> BidsState {
        self.state.read().await.clone()
    }

    pub async fn reset(&self) {
        self.state.write().await.reset();
    }

    /// `POST bids` — submit a proposal after client-side validation.
    pub async fn create(&self, input: CreateBidInput) {
        if let Err(errors) = input.validate() {
            self.state.write().await.status.fail(errors.to_string());
            return;
        }
        self.state.write().await.status.begin();
        match self.backend.create_bid(&input).await {
            Ok(bid) => {
                tracing::info!(bid_id = %bid.id, gig_id = %input.gig_id, "Bid submitted");
                self.state.write().await.create_fulfilled();
            }
            Err(e) => self.state.write().await.status.fail(e.user_message()),
        }
    }

    /// `GET bids/:gigId` — bids on one gig (owner review view).
    pub async fn fetch_for_gig(&self, gig_id: &str) {
        let generation = self.state.write().await.begin_list_fetch();
        match self.backend.gig_bids(gig_id).await {
            Ok(bids) => self.state.write().await.list_fulfilled(generation, bids),
            Err(e) => self
                .state
                .write()
                .await
                .list_rejected(generation, e.user_message()),
        }
    }

    /// `GET bids/my-bids` — the authenticated freelancer's own bids.
    pub async fn fetch_mine(&self) {
        let generation = self.state.write().await.begin_list_fetch();
        match self.backend.my_bids().await {
            Ok(bids) => self.state.write().await.list_fulfilled(generation, bids),
            Err(e) => self
                .state
                .write()
                .await
                .list_rejected(generation, e.user_message()),
        }
    }

    /// `POST bids/:bidId/hire` — hire the freelancer behind a bid.
    pub async fn hire(&self, bid_id: &str) {
        self.state.write().await.status.begin();
        match self.backend.hire_bid(bid_id).await {
            Ok(response) => {
                tracing::info!(bid_id = %response.bid.id, "Freelancer hired");
                self.state.write().await.hire_fulfilled(response.bid);
            }
            Err(e) => self.state.write().await.status.fail(e.user_message()),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests (pure reducers; operation flows live in tests/slice_scenarios.rs)
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use gigboard_core::bid::{BidStatus, GigRef};
    use gigboard_core::user::UserRef;

    fn bid(id: &str, status: BidStatus) -> Bid {
        Bid {
            id: id.into(),
            gig: GigRef::Id("g1".into()),
            freelancer: UserRef::Id("u2".into()),
            message: "pick me".into(),
            price: 100.0,
            status,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn create_sets_success_without_inserting() {
        let mut state = BidsState::default();
        state.status.begin();
        state.create_fulfilled();
        assert!(state.status.is_success);
        assert!(state.bids.is_empty());
    }

    #[test]
    fn list_fetch_replaces_collection() {
        let mut state = BidsState::default();
        let generation = state.begin_list_fetch();
        state.list_fulfilled(
            generation,
            vec![bid("b1", BidStatus::Pending), bid("b2", BidStatus::Pending)],
        );
        assert_eq!(state.bids.len(), 2);
        assert!(!state.status.is_loading);
    }

    #[test]
    fn stale_list_response_is_discarded() {
        let mut state = BidsState::default();
        let first = state.begin_list_fetch();
        let second = state.begin_list_fetch();
        state.list_fulfilled(second, vec![bid("b2", BidStatus::Pending)]);
        state.list_fulfilled(first, vec![bid("b1", BidStatus::Pending)]);
        assert_eq!(state.bids[0].id, "b2");
    }

    #[test]
    fn hire_replaces_matching_bid() {
        let mut state = BidsState::default();
        let generation = state.begin_list_fetch();
        state.list_fulfilled(
            generation,
            vec![bid("b1", BidStatus::Pending), bid("b2", BidStatus::Pending)],
        );
        state.hire_fulfilled(bid("b1", BidStatus::Hired));
        assert_eq!(state.bids[0].status, BidStatus::Hired);
        assert_eq!(state.bids[1].status, BidStatus::Pending);
        assert!(state.status.is_success);
    }

    #[test]
    fn hire_with_unknown_bid_changes_nothing_but_flags() {
        let mut state = BidsState::default();
        state.hire_fulfilled(bid("b9", BidStatus::Hired));
        assert!(state.bids.is_empty());
        assert!(state.status.is_success);
    }

    #[test]
    fn reset_clears_list_and_flags() {
        let mut state = BidsState::default();
        let generation = state.begin_list_fetch();
        state.list_fulfilled(generation, vec![bid("b1", BidStatus::Pending)]);
        state.status.fail("boom");
        state.reset();
        assert!(state.bids.is_empty());
        assert_eq!(state.status, OpStatus::default());
    }
}
