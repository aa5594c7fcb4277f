//! Bid (freelancer proposal) model and input payload.

use serde::{Deserialize, Serialize};

use crate::gig::Gig;
use crate::types::{EntityId, Timestamp};
use crate::user::UserRef;
use crate::validate::{require_non_empty, require_positive, ValidationErrors};

/// Lifecycle status of a bid. One-way: a pending bid is either hired or
/// rejected by the gig owner; the server enforces the transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BidStatus {
    Pending,
    Hired,
    Rejected,
}

/// A reference to a gig that the backend may or may not have populated.
///
/// `GET bids/my-bids` populates the full gig document so a freelancer's
/// bid list can show titles; other endpoints return the bare id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GigRef {
    Populated(Box<Gig>),
    Id(EntityId),
}

impl GigRef {
    /// The referenced gig's id regardless of population.
    pub fn id(&self) -> &str {
        match self {
            GigRef::Populated(gig) => &gig.id,
            GigRef::Id(id) => id,
        }
    }

    /// The full gig document, when populated.
    pub fn gig(&self) -> Option<&Gig> {
        match self {
            GigRef::Populated(gig) => Some(gig),
            GigRef::Id(_) => None,
        }
    }
}

/// A freelancer's proposal against a gig.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    #[serde(rename = "_id")]
    pub id: EntityId,
    #[serde(rename = "gigId")]
    pub gig: GigRef,
    #[serde(rename = "freelancerId")]
    pub freelancer: UserRef,
    pub message: String,
    pub price: f64,
    pub status: BidStatus,
    pub created_at: Timestamp,
}

/// Payload for submitting a bid (`POST bids`).
///
/// The server enforces at-most-one bid per freelancer per gig; this
/// payload only checks form-level problems.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBidInput {
    pub gig_id: EntityId,
    pub message: String,
    pub price: f64,
}

impl CreateBidInput {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();
        require_non_empty(&mut errors, "gigId", &self.gig_id);
        require_non_empty(&mut errors, "message", &self.message);
        require_positive(&mut errors, "price", self.price);
        ValidationErrors(errors).into_result()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
