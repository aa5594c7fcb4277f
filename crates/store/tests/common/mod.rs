//! Shared test fixtures: an in-memory [`MarketplaceBackend`] fake and
//! entity builders.
//!
//! The fake records every call it receives (method + path, query included)
//! so scenarios can assert which endpoints an operation hit, and it can be
//! switched into a failing mode to drive the rejected paths.

use std::sync::Mutex;

use async_trait::async_trait;

use gigboard_api::{ApiError, ApiResult, HireResponse, MarketplaceBackend};
use gigboard_core::bid::{Bid, BidStatus, CreateBidInput, GigRef};
use gigboard_core::gig::{CreateGigInput, Gig, GigFilters, GigStatus};
use gigboard_core::notification::{Notification, NotificationKind};
use gigboard_core::user::{LoginInput, RegisterInput, User, UserRef};

// ---------------------------------------------------------------------------
// Entity builders
// ---------------------------------------------------------------------------

pub fn user(id: &str) -> User {
    User {
        id: id.into(),
        name: "A".into(),
        email: "a@x.com".into(),
    }
}

pub fn gig(id: &str, title: &str) -> Gig {
    Gig {
        id: id.into(),
        title: title.into(),
        description: "desc".into(),
        budget: 500.0,
        owner: UserRef::Id("u1".into()),
        status: GigStatus::Open,
        created_at: chrono::Utc::now(),
    }
}

pub fn bid(id: &str, gig_id: &str, status: BidStatus) -> Bid {
    Bid {
        id: id.into(),
        gig: GigRef::Id(gig_id.into()),
        freelancer: UserRef::Id("u2".into()),
        message: "pick me".into(),
        price: 100.0,
        status,
        created_at: chrono::Utc::now(),
    }
}

pub fn notification(id: &str, is_read: bool) -> Notification {
    Notification {
        id: id.into(),
        recipient_id: "u1".into(),
        sender: None,
        kind: NotificationKind::NewBid,
        message: format!("notification {id}"),
        related_id: "g1".into(),
        is_read,
        created_at: chrono::Utc::now(),
    }
}

// ---------------------------------------------------------------------------
// FakeBackend
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct FakeBackend {
    pub calls: Mutex<Vec<String>>,
    pub identity: Mutex<Option<User>>,
    pub gigs: Mutex<Vec<Gig>>,
    pub bids: Mutex<Vec<Bid>>,
    pub notifications: Mutex<Vec<Notification>>,
    /// When set, every call fails with this message (HTTP 400).
    pub fail_with: Mutex<Option<String>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identity(user: User) -> Self {
        let backend = Self::default();
        *backend.identity.lock().unwrap() = Some(user);
        backend
    }

    pub fn fail_all(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.into());
    }

    pub fn recorded_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn check_failure(&self) -> ApiResult<()> {
        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            return Err(ApiError::Api {
                status: 400,
                message,
            });
        }
        Ok(())
    }

    fn current_identity(&self) -> ApiResult<User> {
        self.identity.lock().unwrap().clone().ok_or(ApiError::Api {
            status: 401,
            message: "Not authorized".into(),
        })
    }
}

#[async_trait]
impl MarketplaceBackend for FakeBackend {
    async fn register(&self, input: &RegisterInput) -> ApiResult<User> {
        self.record("POST auth/register");
        self.check_failure()?;
        let user = User {
            id: "u-new".into(),
            name: input.name.clone(),
            email: input.email.clone(),
        };
        *self.identity.lock().unwrap() = Some(user.clone());
        Ok(user)
    }

    async fn login(&self, _input: &LoginInput) -> ApiResult<User> {
        self.record("POST auth/login");
        self.check_failure()?;
        self.current_identity()
    }

    async fn logout(&self) -> ApiResult<()> {
        self.record("POST auth/logout");
        self.check_failure()?;
        *self.identity.lock().unwrap() = None;
        Ok(())
    }

    async fn check_auth(&self) -> ApiResult<User> {
        self.record("GET auth/check");
        self.check_failure()?;
        self.current_identity()
    }

    async fn list_gigs(&self, filters: &GigFilters) -> ApiResult<Vec<Gig>> {
        let mut call = "GET gigs".to_string();
        let mut sep = '?';
        if let Some(search) = &filters.search {
            call.push_str(&format!("{sep}search={search}"));
            sep = '&';
        }
        if let Some(min_budget) = filters.min_budget {
            call.push_str(&format!("{sep}minBudget={min_budget}"));
        }
        self.record(call);
        self.check_failure()?;
        Ok(self.gigs.lock().unwrap().clone())
    }

    async fn get_gig(&self, gig_id: &str) -> ApiResult<Gig> {
        self.record(format!("GET gigs/{gig_id}"));
        self.check_failure()?;
        self.gigs
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.id == gig_id)
            .cloned()
            .ok_or(ApiError::Api {
                status: 404,
                message: "Gig not found".into(),
            })
    }

    async fn my_gigs(&self) -> ApiResult<Vec<Gig>> {
        self.record("GET gigs/my");
        self.check_failure()?;
        Ok(self.gigs.lock().unwrap().clone())
    }

    async fn create_gig(&self, input: &CreateGigInput) -> ApiResult<Gig> {
        self.record("POST gigs");
        self.check_failure()?;
        let created = Gig {
            id: "g-new".into(),
            title: input.title.clone(),
            description: input.description.clone(),
            budget: input.budget,
            owner: UserRef::Id("u1".into()),
            status: GigStatus::Open,
            created_at: chrono::Utc::now(),
        };
        self.gigs.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_gig_status(&self, gig_id: &str, status: GigStatus) -> ApiResult<Gig> {
        self.record(format!("PUT gigs/{gig_id}/status"));
        self.check_failure()?;
        let mut gigs = self.gigs.lock().unwrap();
        let entry = gigs
            .iter_mut()
            .find(|g| g.id == gig_id)
            .ok_or(ApiError::Api {
                status: 404,
                message: "Gig not found".into(),
            })?;
        entry.status = status;
        Ok(entry.clone())
    }

    async fn create_bid(&self, input: &CreateBidInput) -> ApiResult<Bid> {
        self.record("POST bids");
        self.check_failure()?;
        let created = Bid {
            id: "b-new".into(),
            gig: GigRef::Id(input.gig_id.clone()),
            freelancer: UserRef::Id("u2".into()),
            message: input.message.clone(),
            price: input.price,
            status: BidStatus::Pending,
            created_at: chrono::Utc::now(),
        };
        self.bids.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn gig_bids(&self, gig_id: &str) -> ApiResult<Vec<Bid>> {
        self.record(format!("GET bids/{gig_id}"));
        self.check_failure()?;
        Ok(self
            .bids
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.gig.id() == gig_id)
            .cloned()
            .collect())
    }

    async fn my_bids(&self) -> ApiResult<Vec<Bid>> {
        self.record("GET bids/my-bids");
        self.check_failure()?;
        Ok(self.bids.lock().unwrap().clone())
    }

    async fn hire_bid(&self, bid_id: &str) -> ApiResult<HireResponse> {
        self.record(format!("POST bids/{bid_id}/hire"));
        self.check_failure()?;
        let mut bids = self.bids.lock().unwrap();
        let hired_gig_id = bids
            .iter()
            .find(|b| b.id == bid_id)
            .map(|b| b.gig.id().to_string())
            .ok_or(ApiError::Api {
                status: 404,
                message: "Bid not found".into(),
            })?;
        // Business rule: hiring one bid rejects its siblings.
        for bid in bids.iter_mut() {
            if bid.gig.id() == hired_gig_id {
                bid.status = if bid.id == bid_id {
                    BidStatus::Hired
                } else {
                    BidStatus::Rejected
                };
            }
        }
        let hired = bids.iter().find(|b| b.id == bid_id).cloned().unwrap();
        Ok(HireResponse {
            bid: hired,
            message: Some("Freelancer hired".into()),
        })
    }

    async fn notifications(&self) -> ApiResult<Vec<Notification>> {
        self.record("GET notifications");
        self.check_failure()?;
        Ok(self.notifications.lock().unwrap().clone())
    }

    async fn mark_read(&self, notification_id: &str) -> ApiResult<Notification> {
        self.record(format!("PUT notifications/{notification_id}/read"));
        self.check_failure()?;
        let mut notifications = self.notifications.lock().unwrap();
        let entry = notifications
            .iter_mut()
            .find(|n| n.id == notification_id)
            .ok_or(ApiError::Api {
                status: 404,
                message: "Notification not found".into(),
            })?;
        entry.is_read = true;
        Ok(entry.clone())
    }

    async fn mark_all_read(&self) -> ApiResult<()> {
        self.record("PUT notifications/read-all");
        self.check_failure()?;
        for n in self.notifications.lock().unwrap().iter_mut() {
            n.is_read = true;
        }
        Ok(())
    }
}
