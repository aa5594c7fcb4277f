//! Gigs slice: the gig list, the currently viewed gig, and their
//! request-lifecycle flags.

use std::sync::Arc;

use tokio::sync::RwLock;

use gigboard_api::MarketplaceBackend;
use gigboard_core::gig::{CreateGigInput, Gig, GigFilters, GigStatus};

use crate::generation::{Generation, GenerationCounter};
use crate::status::OpStatus;

/// State owned by the gigs slice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GigsState {
    /// Most recently fetched list (all gigs or the owner's, depending on
    /// the last fetch).
    pub gigs: Vec<Gig>,
    /// The gig a detail view is looking at, when one is loaded.
    pub current_gig: Option<Gig>,
    pub status: OpStatus,
    list_gen: GenerationCounter,
    detail_gen: GenerationCounter,
}

impl GigsState {
    // ---- list fetches ----

    pub fn begin_list_fetch(&mut self) -> Generation {
        self.status.begin_fresh();
        self.list_gen.begin()
    }

    /// Replace the list with the server response, unless a newer list
    /// fetch has begun since this one (stale responses are discarded).
    pub fn list_fulfilled(&mut self, generation: Generation, gigs: Vec<Gig>) {
        if !self.list_gen.is_current(generation) {
            tracing::debug!("Discarding stale gig list response");
            return;
        }
        self.status.settle();
        self.gigs = gigs;
    }

    pub fn list_rejected(&mut self, generation: Generation, message: String) {
        if !self.list_gen.is_current(generation) {
            return;
        }
        self.status.fail(message);
    }

    // ---- detail fetches ----

    pub fn begin_detail_fetch(&mut self) -> Generation {
        self.status.begin_fresh();
        self.detail_gen.begin()
    }

    pub fn detail_fulfilled(&mut self, generation: Generation, gig: Gig) {
        if !self.detail_gen.is_current(generation) {
            tracing::debug!(gig_id = %gig.id, "Discarding stale gig detail response");
            return;
        }
        self.status.settle();
        self.current_gig = Some(gig);
    }

    pub fn detail_rejected(&mut self, generation: Generation, message: String) {
        if !self.detail_gen.is_current(generation) {
            return;
        }
        self.status.fail(message);
    }

    // ---- mutations ----

    /// A newly created gig is inserted at the front of the list.
    pub fn create_fulfilled(&mut self, gig: Gig) {
        self.status.succeed();
        self.gigs.insert(0, gig);
    }

    /// A status update replaces the matching list entry in place and
    /// patches the detail view when it shows the same gig.
    pub fn status_update_fulfilled(&mut self, gig: Gig) {
        self.status.succeed();
        if let Some(current) = &mut self.current_gig {
            if current.id == gig.id {
                *current = gig.clone();
            }
        }
        if let Some(entry) = self.gigs.iter_mut().find(|g| g.id == gig.id) {
            *entry = gig;
        }
    }

    /// Clear status flags and the transient detail state.
    pub fn reset(&mut self) {
        self.status.reset();
        self.current_gig = None;
    }
}

/// Gigs resource slice.
pub struct GigsSlice {
    state: RwLock<GigsState>,
    backend: Arc<dyn MarketplaceBackend>,
}

impl GigsSlice {
    pub fn new(backend: Arc<dyn MarketplaceBackend>) -> Self {
        Self {
            state: RwLock::new(GigsState::default()),
            backend,
        }
    }

    pub async fn snapshot(&self) -> GigsState {
        self.state.read().await.clone()
    }

    pub async fn reset(&self) {
        self.state.write().await.reset();
    }

    /// `GET gigs[?search=][&minBudget=]`.
    pub async fn fetch_all(&self, filters: GigFilters) {
        let generation = self.state.write().await.begin_list_fetch();
        match self.backend.list_gigs(&filters).await {
            Ok(gigs) => self.state.write().await.list_fulfilled(generation, gigs),
            Err(e) => self
                .state
                .write()
                .await
                .list_rejected(generation, e.user_message()),
        }
    }

    /// `GET gigs/my` — gigs owned by the authenticated user.
    pub async fn fetch_mine(&self) {
        let generation = self.state.write().await.begin_list_fetch();
        match self.backend.my_gigs().await {
            Ok(gigs) => self.state.write().await.list_fulfilled(generation, gigs),
            Err(e) => self
                .state
                .write()
                .await
                .list_rejected(generation, e.user_message()),
        }
    }

    /// `GET gigs/:id` — load one gig into the detail state.
    pub async fn fetch_by_id(&self, gig_id: &str) {
        let generation = self.state.write().await.begin_detail_fetch();
        match self.backend.get_gig(gig_id).await {
            Ok(gig) => self.state.write().await.detail_fulfilled(generation, gig),
            Err(e) => self
                .state
                .write()
                .await
                .detail_rejected(generation, e.user_message()),
        }
    }

    /// `POST gigs` — create a gig after client-side validation.
    pub async fn create(&self, input: CreateGigInput) {
        if let Err(errors) = input.validate() {
            self.state.write().await.status.fail(errors.to_string());
            return;
        }
        self.state.write().await.status.begin_fresh();
        match self.backend.create_gig(&input).await {
            Ok(gig) => {
                tracing::info!(gig_id = %gig.id, "Gig created");
                self.state.write().await.create_fulfilled(gig);
            }
            Err(e) => self.state.write().await.status.fail(e.user_message()),
        }
    }

    /// `PUT gigs/:id/status` — request a server-side status transition.
    pub async fn update_status(&self, gig_id: &str, status: GigStatus) {
        self.state.write().await.status.begin_fresh();
        match self.backend.update_gig_status(gig_id, status).await {
            Ok(gig) => self.state.write().await.status_update_fulfilled(gig),
            Err(e) => self.state.write().await.status.fail(e.user_message()),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests (pure reducers; operation flows live in tests/slice_scenarios.rs)
// ---------------------------------------------------------------------------
