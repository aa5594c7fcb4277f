//! REST client for the marketplace backend.
//!
//! One configured [`reqwest::Client`] per application: base URL, JSON
//! bodies, and a cookie store so the backend's HttpOnly session cookie
//! rides along on every request.

use async_trait::async_trait;
use serde_json::json;

use gigboard_core::bid::{Bid, CreateBidInput};
use gigboard_core::gig::{CreateGigInput, Gig, GigFilters, GigStatus};
use gigboard_core::notification::Notification;
use gigboard_core::user::{LoginInput, RegisterInput, User};

use crate::backend::{HireResponse, MarketplaceBackend};
use crate::error::{extract_error_message, ApiError, ApiResult};

/// HTTP client for the marketplace backend.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client targeting the backend at `base_url`
    /// (e.g. `http://localhost:5000/api`).
    ///
    /// Enables an in-memory cookie store: the backend authenticates via an
    /// HttpOnly session cookie set by `auth/login`.
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        let client = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Base URL this client targets (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or an [`ApiError::Api`] carrying the
    /// server-supplied message on failure.
    async fn ensure_success(response: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let url = response.url().clone();
            let body = response.text().await.unwrap_or_default();
            let message = extract_error_message(status.as_u16(), &body);
            tracing::debug!(status = status.as_u16(), url = %url, message = %message, "Backend rejected request");
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> ApiResult<T> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> ApiResult<()> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

/// Build the query pairs for `GET gigs` from the optional filters.
pub fn gig_query(filters: &GigFilters) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if let Some(search) = &filters.search {
        pairs.push(("search", search.clone()));
    }
    if let Some(min_budget) = filters.min_budget {
        pairs.push(("minBudget", min_budget.to_string()));
    }
    pairs
}

#[async_trait]
impl MarketplaceBackend for ApiClient {
    // ---- auth ----

    async fn register(&self, input: &RegisterInput) -> ApiResult<User> {
        let response = self
            .client
            .post(self.url("auth/register"))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn login(&self, input: &LoginInput) -> ApiResult<User> {
        let response = self
            .client
            .post(self.url("auth/login"))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn logout(&self) -> ApiResult<()> {
        let response = self.client.post(self.url("auth/logout")).send().await?;
        Self::check_status(response).await
    }

    async fn check_auth(&self) -> ApiResult<User> {
        let response = self.client.get(self.url("auth/check")).send().await?;
        Self::parse_response(response).await
    }

    // ---- gigs ----

    async fn list_gigs(&self, filters: &GigFilters) -> ApiResult<Vec<Gig>> {
        let mut request = self.client.get(self.url("gigs"));
        if !filters.is_empty() {
            request = request.query(&gig_query(filters));
        }
        let response = request.send().await?;
        Self::parse_response(response).await
    }

    async fn get_gig(&self, gig_id: &str) -> ApiResult<Gig> {
        let response = self
            .client
            .get(self.url(&format!("gigs/{gig_id}")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn my_gigs(&self) -> ApiResult<Vec<Gig>> {
        let response = self.client.get(self.url("gigs/my")).send().await?;
        Self::parse_response(response).await
    }

    async fn create_gig(&self, input: &CreateGigInput) -> ApiResult<Gig> {
        let response = self
            .client
            .post(self.url("gigs"))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn update_gig_status(&self, gig_id: &str, status: GigStatus) -> ApiResult<Gig> {
        let response = self
            .client
            .put(self.url(&format!("gigs/{gig_id}/status")))
            .json(&json!({ "status": status }))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    // ---- bids ----

    async fn create_bid(&self, input: &CreateBidInput) -> ApiResult<Bid> {
        let response = self
            .client
            .post(self.url("bids"))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn gig_bids(&self, gig_id: &str) -> ApiResult<Vec<Bid>> {
        let response = self
            .client
            .get(self.url(&format!("bids/{gig_id}")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn my_bids(&self) -> ApiResult<Vec<Bid>> {
        let response = self.client.get(self.url("bids/my-bids")).send().await?;
        Self::parse_response(response).await
    }

    async fn hire_bid(&self, bid_id: &str) -> ApiResult<HireResponse> {
        let response = self
            .client
            .post(self.url(&format!("bids/{bid_id}/hire")))
            .json(&json!({}))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    // ---- notifications ----

    async fn notifications(&self) -> ApiResult<Vec<Notification>> {
        let response = self.client.get(self.url("notifications")).send().await?;
        Self::parse_response(response).await
    }

    async fn mark_read(&self, notification_id: &str) -> ApiResult<Notification> {
        let response = self
            .client
            .put(self.url(&format!("notifications/{notification_id}/read")))
            .json(&json!({}))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn mark_all_read(&self) -> ApiResult<()> {
        let response = self
            .client
            .put(self.url("notifications/read-all"))
            .json(&json!({}))
            .send()
            .await?;
        Self::check_status(response).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
