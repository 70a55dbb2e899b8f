//! Catalog module - searches the external music catalog and normalizes results.
//!
//! # Architecture
//!
//! Same separation as any other provider integration:
//! - **Domain models** (`domain.rs`) - our types, independent of the provider
//! - **API DTOs** (`dto.rs`) - exact shapes of the provider's token/error bodies
//! - **Auth** (`auth.rs`) - client-credentials token exchange and caching
//! - **Client** (`client.rs`) - HTTP client for the search endpoint
//! - **Adapter** (`adapter.rs`) - raw search payload to [`SearchResult`]
//! - **Traits** (`traits.rs`) - the narrow provider interface, plus mocks
//! - **Service** (`service.rs`) - one search per request, failures degrade
//!
//! # Usage
//!
//! ```ignore
//! use catalog::{CatalogService, SpotifyClient};
//!
//! let client = SpotifyClient::new(config.credentials.clone())?;
//! let service = CatalogService::new(Arc::new(client), "US");
//!
//! let result = service.search(&request).await;
//! println!("{} results", result.total());
//! ```

pub mod adapter;
pub mod auth;
pub mod client;
pub mod domain;
pub mod dto;
pub mod service;
pub mod traits;

pub use client::SpotifyClient;
pub use domain::{CatalogError, CatalogItem, SearchResult};
pub use service::CatalogService;
pub use traits::CatalogApi;
