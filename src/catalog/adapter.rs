//! Adapter layer: convert raw search payloads to domain results
//!
//! This is the ONLY place the provider's search payload is interpreted. If
//! the response format changes, only this file needs to change.
//!
//! The mapping never fails. Anything unexpected (a missing collection key,
//! a non-list `items`, records without a name or uri) degrades to fewer or
//! zero results.

use serde_json::Value;

use super::dto;
use crate::catalog::domain::{CatalogItem, SearchResult};
use crate::search::ContentType;

/// Convert a raw search payload into a [`SearchResult`].
pub fn to_search_result(
    response: Option<&dto::RawSearchResponse>,
    content_type: ContentType,
) -> SearchResult {
    let Some(response) = response else {
        tracing::warn!("Search returned no results");
        return SearchResult::empty();
    };

    let key = content_type.collection_key();
    let Some(collection) = response.get(key) else {
        tracing::error!(
            "Unexpected API response structure. Missing key: {}",
            key
        );
        return SearchResult::empty();
    };

    let items = match collection.get("items").and_then(Value::as_array) {
        Some(items) if !items.is_empty() => items,
        _ => {
            tracing::info!("No {} found", key);
            return SearchResult::empty();
        }
    };

    let accepted: Vec<CatalogItem> = items.iter().filter_map(to_catalog_item).collect();

    let skipped = items.len() - accepted.len();
    if skipped > 0 {
        tracing::debug!("Skipped {} malformed {} entries", skipped, content_type);
    }

    SearchResult::from_items(accepted)
}

/// Accept a record only if it's an object with string `name` and `uri`.
fn to_catalog_item(raw: &Value) -> Option<CatalogItem> {
    let record = raw.as_object()?;
    let name = record.get("name")?.as_str()?;
    let uri = record.get("uri")?.as_str()?;
    Some(CatalogItem::new(name, uri))
}
