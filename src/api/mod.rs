//! HTTP surface.
//!
//! One endpoint: `GET /search?query=..&type=track|album|playlist&limit=N`.
//! The interactive API docs are served at `/`, the raw OpenAPI document at
//! `/openapi.json`.

mod handlers;
pub mod openapi;

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{OpenApi, ToSchema};
use utoipa_scalar::{Scalar, Servable};

use self::openapi::ApiDoc;

use crate::catalog::{CatalogItem, CatalogService, SearchResult};

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
}

impl AppState {
    pub fn new(catalog: CatalogService) -> Self {
        Self { catalog }
    }
}

/// Response body of `GET /search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SearchResponse {
    pub results: Vec<CatalogItem>,
    pub total: usize,
}

impl From<SearchResult> for SearchResponse {
    fn from(result: SearchResult) -> Self {
        let total = result.total();
        Self {
            results: result.into_items(),
            total,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let api = ApiDoc::openapi();
    let api_json = api.clone();

    Router::new()
        .route("/search", get(handlers::search))
        .with_state(state)
        .route("/openapi.json", get(move || async move { Json(api_json) }))
        .merge(Scalar::with_url("/", api))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::traits::mocks::MockCatalog;
    use crate::test_utils::app_state;

    async fn get_raw(uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
        let mock = Arc::new(MockCatalog::no_response());
        let response = create_router(app_state(mock))
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_docs_page_served_at_root() {
        let (status, content_type, body) = get_raw("/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/html"));
        assert!(!body.is_empty());
    }

    #[tokio::test]
    async fn test_openapi_document_describes_search() {
        let (status, _, body) = get_raw("/openapi.json").await;
        assert_eq!(status, StatusCode::OK);

        let doc: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(doc["info"]["title"], "Spotify Search API");
        assert_eq!(doc["info"]["version"], "1.0.0");

        let params: Vec<&str> = doc["paths"]["/search"]["get"]["parameters"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|p| p["name"].as_str())
            .collect();
        assert_eq!(params, vec!["query", "type", "limit"]);
        assert!(doc["components"]["schemas"]["SearchResponse"].is_object());
        assert!(doc["components"]["schemas"]["CatalogItem"].is_object());
    }
}
