//! Inbound search request validation and normalization.
//!
//! Everything here is pure: raw query parameters go in, a bounded
//! [`SearchRequest`] comes out, or an [`Error::InvalidArgument`] that the
//! HTTP layer reports as a client error. No provider call is ever made for a
//! request that fails here.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::{Error, Result};

/// Limit used when the caller doesn't send one.
pub const DEFAULT_LIMIT: u32 = 5;
/// Smallest page the provider accepts.
pub const MIN_LIMIT: u32 = 1;
/// Largest page the provider accepts.
pub const MAX_LIMIT: u32 = 50;

/// Category of searchable catalog entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Track,
    Album,
    Playlist,
}

impl ContentType {
    /// Token sent to the provider and accepted at the boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Track => "track",
            Self::Album => "album",
            Self::Playlist => "playlist",
        }
    }

    /// Key the provider nests results under for this type.
    ///
    /// Kept as an explicit table rather than `format!("{}s")` - it's the
    /// provider's naming, not ours.
    pub fn collection_key(&self) -> &'static str {
        match self {
            Self::Track => "tracks",
            Self::Album => "albums",
            Self::Playlist => "playlists",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = Error;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "track" => Ok(Self::Track),
            "album" => Ok(Self::Album),
            "playlist" => Ok(Self::Playlist),
            other => Err(Error::invalid_argument(format!(
                "invalid type '{}': expected one of track, album, playlist",
                other
            ))),
        }
    }
}

/// Raw query parameters as they arrive on the wire.
///
/// Everything is optional text so validation messages are ours rather
/// than the extractor's.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Search text; underscores are read as spaces (required)
    pub query: Option<String>,
    /// One of `track`, `album`, `playlist` (required)
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    /// Number of results, clamped to 1..=50 (default 5)
    pub limit: Option<String>,
}

/// A normalized request, ready for dispatch to the catalog provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub content_type: ContentType,
    /// Always within `MIN_LIMIT..=MAX_LIMIT`.
    pub limit: u32,
}

impl SearchRequest {
    /// Build a normalized request from already-typed values.
    pub fn new(query: &str, content_type: ContentType, limit: i64) -> Self {
        Self {
            query: normalize_query(query),
            content_type,
            limit: normalize_limit(limit),
        }
    }

    /// Validate and normalize raw inbound parameters.
    pub fn from_params(params: &SearchParams) -> Result<Self> {
        let query = params
            .query
            .as_deref()
            .ok_or_else(|| Error::invalid_argument("missing required parameter 'query'"))?;

        let content_type: ContentType = params
            .content_type
            .as_deref()
            .ok_or_else(|| Error::invalid_argument("missing required parameter 'type'"))?
            .parse()?;

        let limit = match params.limit.as_deref() {
            None => i64::from(DEFAULT_LIMIT),
            Some(raw) => parse_limit(raw)?,
        };

        Ok(Self::new(query, content_type, limit))
    }
}

/// Parse the `limit` parameter. Out-of-range integers are fine (they get
/// clamped); anything that isn't an integer is not.
///
/// Integers too wide for `i64` saturate by sign, so they still clamp to
/// `MAX_LIMIT` / `MIN_LIMIT`.
fn parse_limit(raw: &str) -> Result<i64> {
    if let Ok(limit) = raw.parse::<i64>() {
        return Ok(limit);
    }

    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::invalid_argument(format!(
            "invalid limit '{}': expected an integer",
            raw
        )));
    }

    Ok(if negative { i64::MIN } else { i64::MAX })
}

/// Clamp a requested limit into `[MIN_LIMIT, MAX_LIMIT]`.
pub fn normalize_limit(limit: i64) -> u32 {
    // Clamped value fits in u32 by construction.
    limit.clamp(i64::from(MIN_LIMIT), i64::from(MAX_LIMIT)) as u32
}

/// Replace underscores with spaces. Nothing else is touched.
pub fn normalize_query(query: &str) -> String {
    query.replace('_', " ")
}
