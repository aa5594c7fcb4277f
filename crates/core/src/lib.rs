//! Core domain types for the Gigboard marketplace client.
//!
//! Defines the entities mirrored from the backend (users, gigs, bids,
//! notifications), their status enums, validated input payloads, and the
//! click-through routing table. Everything here is transport-agnostic;
//! the HTTP and WebSocket bindings live in sibling crates.

pub mod bid;
pub mod gig;
pub mod notification;
pub mod types;
pub mod user;
pub mod validate;
