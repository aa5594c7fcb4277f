//! Notification model, read-state, and click-through routing.

use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Timestamp};
use crate::user::UserRef;

/// Kind of server-generated notification.
///
/// Unknown future kinds deserialize to [`NotificationKind::Other`] so a
/// new backend event never breaks an old client; routing degrades to the
/// dashboard fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    NewBid,
    BidAccepted,
    NewGig,
    #[serde(other)]
    Other,
}

/// A server-pushed or fetched notification addressed to one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub recipient_id: EntityId,
    /// Originating user, when the event has one (system events carry null).
    #[serde(rename = "senderId")]
    pub sender: Option<UserRef>,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
    /// Interpretation depends on `kind`; for both defined cases it is the
    /// gig the event relates to.
    pub related_id: EntityId,
    pub is_read: bool,
    pub created_at: Timestamp,
}

/// Where a click on a notification should take the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The bid-review view for a gig the viewer owns.
    BidReview { gig_id: EntityId },
    /// The public gig detail view.
    GigDetail { gig_id: EntityId },
    /// Generic fallback for unknown notification kinds.
    Dashboard,
}

impl Notification {
    /// Hard-coded click-through routing table.
    pub fn click_route(&self) -> Route {
        match self.kind {
            NotificationKind::NewBid => Route::BidReview {
                gig_id: self.related_id.clone(),
            },
            NotificationKind::BidAccepted => Route::GigDetail {
                gig_id: self.related_id.clone(),
            },
            NotificationKind::NewGig | NotificationKind::Other => Route::Dashboard,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
