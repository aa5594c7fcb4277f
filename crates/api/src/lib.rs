//! HTTP binding for the Gigboard marketplace backend.
//!
//! [`ApiClient`] wraps the backend REST surface (auth, gigs, bids,
//! notifications) with a single configured [`reqwest`] client. The
//! [`MarketplaceBackend`] trait abstracts the same surface so the store
//! layer can be exercised against an in-memory fake.

pub mod backend;
pub mod client;
pub mod error;

pub use backend::{HireResponse, MarketplaceBackend};
pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
