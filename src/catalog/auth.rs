//! Client-credentials token handling.
//!
//! The service authenticates to the provider with its own client id and
//! secret, trading them for a short-lived bearer token. The token is cached
//! and refreshed on demand. The cache sits behind an async mutex so
//! concurrent requests that find it stale wait for a single refresh instead
//! of each hitting the accounts service.

use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use super::dto;
use crate::catalog::domain::CatalogError;
use crate::config::Credentials;

/// Default accounts-service token endpoint
pub const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Refresh this long before the provider says the token expires.
const REFRESH_MARGIN: Duration = Duration::from_secs(60);

/// A bearer token and the instant it stops being usable.
#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

impl CachedToken {
    fn from_response(response: dto::TokenResponse, now: Instant) -> Self {
        let lifetime = Duration::from_secs(response.expires_in).saturating_sub(REFRESH_MARGIN);
        Self {
            access_token: response.access_token,
            expires_at: now + lifetime,
        }
    }

    fn is_fresh(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Exchanges credentials for bearer tokens and caches the result.
pub struct TokenProvider {
    credentials: Credentials,
    http_client: reqwest::Client,
    token_url: String,
    cached: Mutex<Option<CachedToken>>,
}

impl TokenProvider {
    pub fn new(credentials: Credentials, http_client: reqwest::Client) -> Self {
        Self::with_token_url(credentials, http_client, TOKEN_URL)
    }

    pub fn with_token_url(
        credentials: Credentials,
        http_client: reqwest::Client,
        token_url: impl Into<String>,
    ) -> Self {
        Self {
            credentials,
            http_client,
            token_url: token_url.into(),
            cached: Mutex::new(None),
        }
    }

    /// Return a usable bearer token, fetching a new one if needed.
    pub async fn bearer(&self) -> Result<String, CatalogError> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref().filter(|t| t.is_fresh(Instant::now())) {
            return Ok(token.access_token.clone());
        }

        tracing::debug!("Requesting new provider access token");
        let response = self.request_token().await?;
        let token = CachedToken::from_response(response, Instant::now());
        let access_token = token.access_token.clone();
        *cached = Some(token);
        Ok(access_token)
    }

    /// Drop the cached token so the next call fetches a fresh one.
    pub async fn invalidate(&self) {
        *self.cached.lock().await = None;
    }

    async fn request_token(&self) -> Result<dto::TokenResponse, CatalogError> {
        let response = self
            .http_client
            .post(&self.token_url)
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| CatalogError::ProviderUnavailable(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::BAD_REQUEST || status == reqwest::StatusCode::UNAUTHORIZED
        {
            let message = match response.json::<dto::AuthErrorResponse>().await {
                Ok(body) => body.message(),
                Err(_) => format!("HTTP {}", status),
            };
            return Err(CatalogError::Auth(message));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CatalogError::RateLimited);
        }

        if !status.is_success() {
            return Err(CatalogError::ProviderUnavailable(format!(
                "token endpoint returned HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<dto::TokenResponse>()
            .await
            .map_err(|e| CatalogError::MalformedResponse(e.to_string()))
    }
}
