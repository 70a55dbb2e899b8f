//! Command-line interface for catalog-search.
//!
//! Every option can also be supplied through the environment, which is how
//! the provider credentials are normally passed.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::config::{self, Config, ConfigError};

/// Catalog Search - a small HTTP façade over the Spotify search API
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Provider client identifier
    #[arg(long, env = config::CLIENT_ID_VAR, hide_env_values = true)]
    pub client_id: Option<String>,

    /// Provider client secret
    #[arg(long, env = config::CLIENT_SECRET_VAR, hide_env_values = true)]
    pub client_secret: Option<String>,

    /// Address to listen on
    #[arg(long, env = "BIND_ADDR", default_value = config::DEFAULT_BIND_ADDR)]
    pub bind: SocketAddr,

    /// Directory for the rotating log files
    #[arg(long, env = "LOG_DIR", default_value = "logs")]
    pub log_dir: PathBuf,
}

impl Cli {
    /// Turn parsed arguments into a validated [`Config`].
    pub fn into_config(self) -> Result<Config, ConfigError> {
        Config::from_parts(self.client_id, self.client_secret, self.bind)
    }
}
