//! Gig (job posting) model, status lifecycle, and input payloads.

use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Timestamp};
use crate::user::UserRef;
use crate::validate::{require_max_len, require_non_empty, require_positive, ValidationErrors};

/// Server-authoritative gig lifecycle status.
///
/// The client only ever *requests* transitions (`PUT gigs/:id/status`);
/// the value stored here always comes back from the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GigStatus {
    Open,
    /// A freelancer has been hired. Some backend versions spell this
    /// `assigned` on the wire; both deserialize here.
    #[serde(alias = "assigned")]
    Active,
    Completed,
    Closed,
}

impl GigStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GigStatus::Open => "open",
            GigStatus::Active => "active",
            GigStatus::Completed => "completed",
            GigStatus::Closed => "closed",
        }
    }
}

/// A job posting with a budget, owned by a client user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gig {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub budget: f64,
    #[serde(rename = "ownerId")]
    pub owner: UserRef,
    pub status: GigStatus,
    pub created_at: Timestamp,
}

/// Optional filters for the gig list endpoint (`GET gigs`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GigFilters {
    /// Free-text search over title/description.
    pub search: Option<String>,
    /// Lower bound on budget.
    pub min_budget: Option<f64>,
}

impl GigFilters {
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.min_budget.is_none()
    }
}

/// Payload for creating a gig (`POST gigs`).
#[derive(Debug, Clone, Serialize)]
pub struct CreateGigInput {
    pub title: String,
    pub description: String,
    pub budget: f64,
}

impl CreateGigInput {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();
        require_non_empty(&mut errors, "title", &self.title);
        require_max_len(&mut errors, "title", &self.title, 200);
        require_non_empty(&mut errors, "description", &self.description);
        require_positive(&mut errors, "budget", self.budget);
        ValidationErrors(errors).into_result()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
