//! User identity types and authentication input payloads.

use serde::{Deserialize, Serialize};

use crate::types::EntityId;
use crate::validate::{
    require_email, require_max_len, require_min_len, require_non_empty, ValidationErrors,
};

/// The authenticated session subject.
///
/// The client only ever holds a transient copy of the last-known identity;
/// the backend session cookie is the real source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub name: String,
    pub email: String,
}

/// A compact user summary embedded in populated references
/// (e.g. a gig's owner or a notification's sender).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A reference to a user that the backend may or may not have populated.
///
/// List endpoints sometimes return the bare id string; detail endpoints
/// return the embedded summary document. Both shapes deserialize here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    Populated(UserSummary),
    Id(EntityId),
}

impl UserRef {
    /// The referenced user's id regardless of population.
    pub fn id(&self) -> &str {
        match self {
            UserRef::Populated(summary) => &summary.id,
            UserRef::Id(id) => id,
        }
    }

    /// The referenced user's display name, when populated.
    pub fn name(&self) -> Option<&str> {
        match self {
            UserRef::Populated(summary) => Some(&summary.name),
            UserRef::Id(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Input payloads
// ---------------------------------------------------------------------------

/// Registration form payload for `POST auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterInput {
    /// Validate all fields, returning every violation at once.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();
        require_non_empty(&mut errors, "name", &self.name);
        require_max_len(&mut errors, "name", &self.name, 100);
        require_email(&mut errors, "email", &self.email);
        require_min_len(&mut errors, "password", &self.password, 6);
        ValidationErrors(errors).into_result()
    }
}

/// Login form payload for `POST auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl LoginInput {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();
        require_email(&mut errors, "email", &self.email);
        require_non_empty(&mut errors, "password", &self.password);
        ValidationErrors(errors).into_result()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
