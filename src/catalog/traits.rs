//! Trait definition for the external catalog provider.
//!
//! The service only ever needs one capability from the provider: run a
//! search and hand back the raw payload. Keeping that behind a trait lets
//! tests substitute mock implementations for the real HTTP client.
//!
//! # Example
//!
//! ```ignore
//! use catalog_search::catalog::traits::CatalogApi;
//!
//! async fn lookup<T: CatalogApi>(client: &T) {
//!     let raw = client.search("daft punk", ContentType::Track, 5, "US").await?;
//! }
//! ```

use async_trait::async_trait;

use super::domain::CatalogError;
use super::dto::RawSearchResponse;
use crate::search::ContentType;

/// Narrow interface to the catalog provider.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Run a single search. `Ok(None)` means no structured response.
    async fn search(
        &self,
        query: &str,
        content_type: ContentType,
        limit: u32,
        market: &str,
    ) -> Result<Option<RawSearchResponse>, CatalogError>;
}

#[async_trait]
impl CatalogApi for super::client::SpotifyClient {
    async fn search(
        &self,
        query: &str,
        content_type: ContentType,
        limit: u32,
        market: &str,
    ) -> Result<Option<RawSearchResponse>, CatalogError> {
        self.search(query, content_type, limit, market).await
    }
}

/// Mock catalog providers for testing.
#[cfg(test)]
pub mod mocks {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::json;

    use super::*;

    /// Arguments of a call made against a mock.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedCall {
        pub query: String,
        pub content_type: ContentType,
        pub limit: u32,
        pub market: String,
    }

    /// Mock provider that returns a canned response and records calls.
    pub struct MockCatalog {
        response: Result<Option<RawSearchResponse>, CatalogError>,
        calls: AtomicUsize,
        last_call: Mutex<Option<RecordedCall>>,
    }

    impl MockCatalog {
        /// Create a mock that returns the given payload.
        pub fn with_response(raw: RawSearchResponse) -> Self {
            Self::new(Ok(Some(raw)))
        }

        /// Create a mock that answers with no structured body.
        pub fn no_response() -> Self {
            Self::new(Ok(None))
        }

        /// Create a mock that returns an error.
        pub fn with_error(error: CatalogError) -> Self {
            Self::new(Err(error))
        }

        /// Create a mock returning one well-formed track.
        pub fn single_track(name: &str, uri: &str) -> Self {
            Self::with_response(json!({
                "tracks": {"items": [{"name": name, "uri": uri}]}
            }))
        }

        fn new(response: Result<Option<RawSearchResponse>, CatalogError>) -> Self {
            Self {
                response,
                calls: AtomicUsize::new(0),
                last_call: Mutex::new(None),
            }
        }

        /// How many searches have been issued against this mock.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        /// Arguments of the most recent search.
        pub fn last_call(&self) -> Option<RecordedCall> {
            self.last_call.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CatalogApi for MockCatalog {
        async fn search(
            &self,
            query: &str,
            content_type: ContentType,
            limit: u32,
            market: &str,
        ) -> Result<Option<RawSearchResponse>, CatalogError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_call.lock().unwrap() = Some(RecordedCall {
                query: query.to_string(),
                content_type,
                limit,
                market: market.to_string(),
            });
            self.response.clone()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_records_calls() {
            let mock = MockCatalog::single_track("Song A", "spotify:track:123");
            let raw = mock
                .search("song a", ContentType::Track, 5, "US")
                .await
                .unwrap()
                .unwrap();

            assert!(raw.get("tracks").is_some());
            assert_eq!(mock.calls(), 1);
            assert_eq!(
                mock.last_call(),
                Some(RecordedCall {
                    query: "song a".to_string(),
                    content_type: ContentType::Track,
                    limit: 5,
                    market: "US".to_string(),
                })
            );
        }

        #[tokio::test]
        async fn test_mock_error() {
            let mock = MockCatalog::with_error(CatalogError::ProviderUnavailable(
                "connection reset".to_string(),
            ));
            let result = mock.search("x", ContentType::Album, 1, "US").await;
            assert!(matches!(result, Err(CatalogError::ProviderUnavailable(_))));
        }
    }
}
