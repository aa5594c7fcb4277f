//! Field-level validation helpers for input payloads.
//!
//! Validation runs on the client before any network call is made, so a
//! form can surface problems inline per field. Each input payload exposes
//! a `validate()` method returning every violation at once rather than
//! failing on the first.

use std::fmt;

use serde::Serialize;

/// A single field-level validation violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    /// Name of the offending input field.
    pub field: &'static str,
    /// Human-readable problem description.
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// All violations found while validating one input payload.
///
/// Displays as `field: message` lines joined with `"; "` so a slice can
/// reduce the whole set into its single error message.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Wrap a list of violations into a `Result`, empty list meaning valid.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{joined}")
    }
}

impl std::error::Error for ValidationErrors {}

// ---------------------------------------------------------------------------
// Rule functions
// ---------------------------------------------------------------------------

/// Require a non-empty string (after trimming).
pub fn require_non_empty(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "must not be empty"));
    }
}

/// Require a string no longer than `max` characters.
pub fn require_max_len(errors: &mut Vec<FieldError>, field: &'static str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.push(FieldError::new(
            field,
            format!("must be at most {max} characters"),
        ));
    }
}

/// Require a string of at least `min` characters.
pub fn require_min_len(errors: &mut Vec<FieldError>, field: &'static str, value: &str, min: usize) {
    if value.chars().count() < min {
        errors.push(FieldError::new(
            field,
            format!("must be at least {min} characters"),
        ));
    }
}

/// Require a plausible email address (`local@domain` with a dot in the domain).
///
/// This is a form-level sanity check, not RFC 5322 — the backend remains
/// the authority on deliverability.
pub fn require_email(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    };
    if !valid {
        errors.push(FieldError::new(field, "must be a valid email address"));
    }
}

/// Require a strictly positive amount.
pub fn require_positive(errors: &mut Vec<FieldError>, field: &'static str, value: f64) {
    if !(value > 0.0) {
        errors.push(FieldError::new(field, "must be greater than zero"));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
