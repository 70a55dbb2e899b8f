//! Internal domain models for catalog search.
//!
//! These types are OUR types - they don't change when the provider's API
//! changes. Provider payloads get converted into these via the adapter.

use serde::Serialize;
use utoipa::ToSchema;

/// A single search hit: display name plus the provider's opaque identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CatalogItem {
    pub name: String,
    /// Stable identifier assigned by the provider, returned as-is
    pub uri: String,
}

impl CatalogItem {
    pub fn new(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
        }
    }
}

/// Outcome of one search.
///
/// `total` is always the number of items actually held, never a count the
/// provider advertised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    items: Vec<CatalogItem>,
}

impl SearchResult {
    /// The degraded "no results" response.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<CatalogItem> {
        self.items
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Errors raised while talking to or interpreting the catalog provider.
///
/// None of these are ever surfaced to an HTTP caller; the catalog service
/// turns them into an empty [`SearchResult`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    /// Network failure, timeout or provider-side 5xx
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Credentials rejected or bearer token refused
    #[error("Provider authentication failed: {0}")]
    Auth(String),

    #[error("Rate limited by provider")]
    RateLimited,

    /// Provider answered with something we couldn't decode
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    /// Provider rejected the request (4xx other than auth/rate limiting)
    #[error("Provider rejected request: {0}")]
    Rejected(String),
}

impl CatalogError {
    /// Whether this is a credential problem rather than a transient one.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}
