//! Spotify Web API Data Transfer Objects
//!
//! These types match EXACTLY what the accounts and search endpoints return.
//! DO NOT use these types outside the catalog module - convert to domain types.
//!
//! The search payload is intentionally NOT modelled here. Its item records are
//! heterogeneous (and playlist searches routinely contain `null` entries), so
//! the adapter walks it as a `serde_json::Value` and picks out what it needs.
//!
//! API Reference: https://developer.spotify.com/documentation/web-api
//!
//! Example token response:
//! ```json
//! {
//!   "access_token": "BQDf...",
//!   "token_type": "Bearer",
//!   "expires_in": 3600
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Raw search payload as returned by the provider.
pub type RawSearchResponse = serde_json::Value;

/// Client-credentials token response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    /// Lifetime in seconds
    pub expires_in: u64,
}

/// Error body from the accounts service (OAuth2 style)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthErrorResponse {
    pub error: String,
    pub error_description: Option<String>,
}

impl AuthErrorResponse {
    pub fn message(&self) -> String {
        match &self.error_description {
            Some(desc) => format!("{}: {}", self.error, desc),
            None => self.error.clone(),
        }
    }
}

/// Error envelope from the Web API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub status: u16,
    #[serde(default)]
    pub message: String,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// ============================================================================
