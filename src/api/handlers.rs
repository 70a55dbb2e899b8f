use axum::Json;
use axum::extract::{Query, State};

use super::{AppState, SearchResponse};
use crate::error::Result;
use crate::search::{SearchParams, SearchRequest};

/// Search the catalog and return simplified name/uri pairs.
///
/// Validation failures are the only error this handler returns. Provider
/// trouble shows up as `{"results": [], "total": 0}` with a 200.
#[utoipa::path(
    get,
    path = "/search",
    tag = "search",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching items (empty when the provider is unavailable)", body = SearchResponse),
        (status = 400, description = "Unknown type, missing parameter or non-integer limit")
    )
)]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>> {
    let request = SearchRequest::from_params(&params)?;
    let result = state.catalog.search(&request).await;
    Ok(Json(result.into()))
}
