//! Error type for the backend HTTP surface.

/// Errors from the marketplace REST layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Server-supplied message, or a generic fallback when the body
        /// carried none.
        message: String,
    },
}

/// Convenience alias for backend call results.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// The text a view should display for this failure.
    ///
    /// Server-supplied message if present, else the transport error text —
    /// the same ladder the slices reduce into their `message` field.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Api { message, .. } => message.clone(),
            ApiError::Request(e) => e.to_string(),
        }
    }
}

/// Extract a display message from a non-2xx response body.
///
/// The backend reports errors as `{"message": "..."}`; fall back to the
/// raw body, then to a generic status line when the body is empty.
pub fn extract_error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }
    if body.trim().is_empty() {
        format!("Request failed with status {status}")
    } else {
        body.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
