//! Catalog search service.
//!
//! Owns the long-lived provider handle and applies the error policy: a bad
//! request never gets this far, and anything that goes wrong on the
//! provider side turns into an empty result plus an operator-facing log
//! line. Callers of [`CatalogService::search`] cannot observe a provider
//! failure other than as "no results".

use std::sync::Arc;

use super::adapter;
use super::domain::{CatalogError, SearchResult};
use super::traits::CatalogApi;
use crate::search::SearchRequest;

/// Search service shared by all request handlers.
#[derive(Clone)]
pub struct CatalogService {
    api: Arc<dyn CatalogApi>,
    market: String,
}

impl CatalogService {
    pub fn new(api: Arc<dyn CatalogApi>, market: impl Into<String>) -> Self {
        Self {
            api,
            market: market.into(),
        }
    }

    /// Run exactly one provider search for a normalized request.
    pub async fn search(&self, request: &SearchRequest) -> SearchResult {
        tracing::info!(
            "Searching for {} with query: {}, limit: {}",
            request.content_type,
            request.query,
            request.limit
        );

        let raw = match self
            .api
            .search(
                &request.query,
                request.content_type,
                request.limit,
                &self.market,
            )
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                log_provider_failure(request, &e);
                return SearchResult::empty();
            }
        };

        let result = adapter::to_search_result(raw.as_ref(), request.content_type);
        tracing::info!("Found {} {} results", result.total(), request.content_type);
        result
    }
}

fn log_provider_failure(request: &SearchRequest, error: &CatalogError) {
    if error.is_auth() {
        tracing::error!(
            query = %request.query,
            content_type = %request.content_type,
            limit = request.limit,
            "Provider authentication failed, check CLIENT_ID/CLIENT_SECRET: {}",
            error
        );
    } else {
        tracing::error!(
            query = %request.query,
            content_type = %request.content_type,
            limit = request.limit,
            "Error processing search request: {}",
            error
        );
    }
}
