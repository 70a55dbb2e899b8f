//! Spotify Web API HTTP client
//!
//! Handles communication with the search endpoint.
//! See: https://developer.spotify.com/documentation/web-api/reference/search
//!
//! ## API Quirks
//!
//! ### Results are nested under a pluralized key
//! A `type=track` search answers with `{"tracks": {"items": [...]}}`. The
//! client hands the payload back untouched; the adapter knows the keys.
//!
//! ### Null items
//! Playlist searches regularly contain `null` entries in `items`. Another
//! reason the payload isn't decoded into strict DTOs here.
//!
//! ### Expired tokens
//! A 401 from the search endpoint means the cached bearer token is no longer
//! accepted. We drop it so the next request fetches a new one, but do not
//! retry the current request.

use super::auth::TokenProvider;
use super::dto;
use crate::catalog::domain::CatalogError;
use crate::config::Credentials;
use crate::search::ContentType;

/// Default Web API base URL
pub const API_BASE_URL: &str = "https://api.spotify.com/v1";

/// User agent string sent with every request
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Spotify Web API client
pub struct SpotifyClient {
    http_client: reqwest::Client,
    tokens: TokenProvider,
    base_url: String,
}

impl SpotifyClient {
    /// Create a new client authenticated with the given credentials
    ///
    /// The client is configured to:
    /// - Accept gzip-compressed responses
    /// - Send a User-Agent header identifying the service
    pub fn new(credentials: Credentials) -> Result<Self, CatalogError> {
        let http_client = build_http_client()?;
        let tokens = TokenProvider::new(credentials, http_client.clone());
        Ok(Self {
            http_client,
            tokens,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Create a client with custom API and token endpoints
    pub fn with_base_urls(
        credentials: Credentials,
        base_url: impl Into<String>,
        token_url: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let http_client = build_http_client()?;
        let tokens = TokenProvider::with_token_url(credentials, http_client.clone(), token_url);
        Ok(Self {
            http_client,
            tokens,
            base_url: base_url.into(),
        })
    }

    /// Run one search and return the raw payload.
    ///
    /// `Ok(None)` means the provider answered successfully but with no
    /// structured body (empty or `null`).
    pub async fn search(
        &self,
        query: &str,
        content_type: ContentType,
        limit: u32,
        market: &str,
    ) -> Result<Option<dto::RawSearchResponse>, CatalogError> {
        let bearer = self.tokens.bearer().await?;

        let response = self
            .http_client
            .get(self.search_url())
            .bearer_auth(bearer)
            .query(&search_params(query, content_type, limit, market))
            .send()
            .await
            .map_err(|e| CatalogError::ProviderUnavailable(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            self.tokens.invalidate().await;
            let message = api_error_message(response).await;
            return Err(CatalogError::Auth(message));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CatalogError::RateLimited);
        }

        if status.is_client_error() {
            let message = api_error_message(response).await;
            return Err(CatalogError::Rejected(message));
        }

        if !status.is_success() {
            return Err(CatalogError::ProviderUnavailable(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::ProviderUnavailable(e.to_string()))?;

        parse_search_body(&body)
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.base_url.trim_end_matches('/'))
    }
}

fn build_http_client() -> Result<reqwest::Client, CatalogError> {
    reqwest::Client::builder()
        .gzip(true)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| CatalogError::ProviderUnavailable(format!("failed to build HTTP client: {}", e)))
}

/// Query string for one search call.
fn search_params(
    query: &str,
    content_type: ContentType,
    limit: u32,
    market: &str,
) -> [(&'static str, String); 4] {
    [
        ("q", query.to_string()),
        ("type", content_type.as_str().to_string()),
        ("limit", limit.to_string()),
        ("market", market.to_string()),
    ]
}

/// Decode a successful search body. Empty and `null` bodies mean "nothing".
fn parse_search_body(body: &str) -> Result<Option<dto::RawSearchResponse>, CatalogError> {
    if body.trim().is_empty() {
        return Ok(None);
    }

    let value: dto::RawSearchResponse =
        serde_json::from_str(body).map_err(|e| CatalogError::MalformedResponse(e.to_string()))?;

    Ok((!value.is_null()).then_some(value))
}

/// Best-effort error message from a failed Web API response.
async fn api_error_message(response: reqwest::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<dto::ApiErrorResponse>(&body) {
        Ok(err) if !err.error.message.is_empty() => err.error.message,
        _ => format!(
            "HTTP {}: {}",
            status,
            body.chars().take(200).collect::<String>()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn credentials() -> Credentials {
        Credentials {
            client_id: "id".to_string(),
            client_secret: "secret".to_string(),
        }
    }

    #[test]
    fn test_client_creation() {
        let client = SpotifyClient::new(credentials()).unwrap();
        assert_eq!(client.base_url, API_BASE_URL);
        assert_eq!(client.search_url(), "https://api.spotify.com/v1/search");
    }

    #[test]
    fn test_client_with_custom_url() {
        let client =
            SpotifyClient::with_base_urls(credentials(), "http://localhost:8080/", "http://x")
                .unwrap();
        assert_eq!(client.search_url(), "http://localhost:8080/search");
    }

    #[test]
    fn test_search_params() {
        let params = search_params("foo bar", ContentType::Playlist, 7, "US");
        assert_eq!(params[0], ("q", "foo bar".to_string()));
        assert_eq!(params[1], ("type", "playlist".to_string()));
        assert_eq!(params[2], ("limit", "7".to_string()));
        assert_eq!(params[3], ("market", "US".to_string()));
    }

    #[test]
    fn test_user_agent_format() {
        assert!(USER_AGENT.starts_with("catalog-search/"));
    }

    #[test]
    fn test_parse_empty_body() {
        assert!(parse_search_body("").unwrap().is_none());
        assert!(parse_search_body("  \n").unwrap().is_none());
        assert!(parse_search_body("null").unwrap().is_none());
    }

    #[test]
    fn test_parse_structured_body() {
        let value = parse_search_body(r#"{"tracks": {"items": []}}"#)
            .unwrap()
            .unwrap();
        assert_eq!(value, json!({"tracks": {"items": []}}));
    }

    #[test]
    fn test_parse_garbage_body() {
        let err = parse_search_body("<html>oops</html>").unwrap_err();
        assert!(matches!(err, CatalogError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_unavailable() {
        let client = SpotifyClient::with_base_urls(
            credentials(),
            "http://127.0.0.1:9",
            "http://127.0.0.1:9/api/token",
        )
        .unwrap();
        let err = client
            .search("x", ContentType::Track, 5, "US")
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::ProviderUnavailable(_)));
    }
}
