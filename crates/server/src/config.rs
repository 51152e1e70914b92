//! Server configuration.
//!
//! Values come from the CLI (which itself falls back to environment
//! variables); `Default` gives the settings used when nothing is provided.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::cors::{DEFAULT_ALLOWED_ORIGINS, OriginPolicy};

/// Port used when neither `--port` nor `PORT` is set
pub const DEFAULT_PORT: u16 = 3000;

/// Everything needed to start the HTTP server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// JSON dataset loaded once at startup
    pub data_file: PathBuf,
    /// Directory served for paths no route matches
    pub static_dir: PathBuf,
    /// Origins allowed to make cross-origin requests
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Address to bind: all interfaces on the configured port
    pub fn address(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    pub fn origin_policy(&self) -> OriginPolicy {
        OriginPolicy::new(&self.allowed_origins)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_file: PathBuf::from("data/movies.json"),
            static_dir: PathBuf::from("web"),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
        }
    }
}
