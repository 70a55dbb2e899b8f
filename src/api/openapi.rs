use utoipa::OpenApi;

use super::SearchResponse;
use crate::catalog::CatalogItem;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Spotify Search API",
        description = "A simplified service for searching Spotify content",
        version = "1.0.0"
    ),
    paths(super::handlers::search),
    tags(
        (name = "search", description = "Catalog search endpoints")
    ),
    components(schemas(SearchResponse, CatalogItem))
)]
pub struct ApiDoc;
