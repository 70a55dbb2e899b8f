//! Startup configuration.
//!
//! Values come from the command line or the environment (see [`crate::cli`]),
//! with a `.env` file in the working directory loaded first. Configuration is
//! built once at startup and never mutated afterwards.

use std::fmt;
use std::net::SocketAddr;

/// Environment variable holding the provider client identifier.
pub const CLIENT_ID_VAR: &str = "CLIENT_ID";
/// Environment variable holding the provider client secret.
pub const CLIENT_SECRET_VAR: &str = "CLIENT_SECRET";

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Market every search is scoped to.
pub const DEFAULT_MARKET: &str = "US";

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Provider credentials (exchanged for a bearer token by the catalog client)
    pub credentials: Credentials,

    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,

    /// Provider market/region
    pub market: String,
}

/// Provider client credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Build a config from raw optional values.
    ///
    /// Missing or blank credentials are all reported together so the operator
    /// can fix them in one go.
    pub fn from_parts(
        client_id: Option<String>,
        client_secret: Option<String>,
        bind_addr: SocketAddr,
    ) -> Result<Self, ConfigError> {
        let client_id = client_id.filter(|v| !v.trim().is_empty());
        let client_secret = client_secret.filter(|v| !v.trim().is_empty());

        match (client_id, client_secret) {
            (Some(client_id), Some(client_secret)) => Ok(Self {
                credentials: Credentials {
                    client_id,
                    client_secret,
                },
                bind_addr,
                market: DEFAULT_MARKET.to_string(),
            }),
            (id, secret) => {
                let mut missing = Vec::new();
                if id.is_none() {
                    missing.push(CLIENT_ID_VAR.to_string());
                }
                if secret.is_none() {
                    missing.push(CLIENT_SECRET_VAR.to_string());
                }
                Err(ConfigError::MissingEnv(missing))
            }
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Please set the following environment variables: {}", .0.join(", "))]
    MissingEnv(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bind() -> SocketAddr {
        DEFAULT_BIND_ADDR.parse().unwrap()
    }

    #[test]
    fn test_complete_config() {
        let config =
            Config::from_parts(Some("id".into()), Some("secret".into()), bind()).unwrap();
        assert_eq!(config.credentials.client_id, "id");
        assert_eq!(config.credentials.client_secret, "secret");
        assert_eq!(config.market, "US");
        assert_eq!(config.bind_addr.port(), 8000);
    }

    #[test]
    fn test_reports_every_missing_variable() {
        let err = Config::from_parts(None, None, bind()).unwrap_err();
        let ConfigError::MissingEnv(missing) = &err;
        assert_eq!(missing, &vec!["CLIENT_ID".to_string(), "CLIENT_SECRET".to_string()]);
        assert!(err.to_string().contains("CLIENT_ID, CLIENT_SECRET"));
    }

    #[test]
    fn test_blank_counts_as_missing() {
        let err = Config::from_parts(Some("id".into()), Some("   ".into()), bind()).unwrap_err();
        let ConfigError::MissingEnv(missing) = err;
        assert_eq!(missing, vec!["CLIENT_SECRET".to_string()]);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds = Credentials {
            client_id: "id".into(),
            client_secret: "hunter2".into(),
        };
        let debug = format!("{:?}", creds);
        assert!(debug.contains("id"));
        assert!(!debug.contains("hunter2"));
    }
}
