//! Gateway configuration loaded from the environment.
//!
//! Two knobs: where the gateway listens and where the REST backend lives.
//! Defaults put GraphQL on port 5000 and the backend on port 3000, so an
//! unconfigured gateway works against a local json-server out of the box.

use crate::error::{Error, Result};
use std::net::SocketAddr;

/// Environment variable naming the listen address.
pub const LISTEN_ADDR_VAR: &str = "GATEWAY_LISTEN_ADDR";

/// Environment variable naming the REST backend base URL.
pub const BACKEND_URL_VAR: &str = "GATEWAY_BACKEND_URL";

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";

/// Runtime configuration for the gateway process.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the GraphQL endpoint binds to
    pub listen_addr: SocketAddr,

    /// Base URL of the REST backend (system of record)
    pub backend_url: String,
}

impl Config {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let listen_raw =
            lookup(LISTEN_ADDR_VAR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr: SocketAddr = listen_raw.parse().map_err(|e| {
            Error::Config(format!("invalid {LISTEN_ADDR_VAR} `{listen_raw}`: {e}"))
        })?;

        let backend_url =
            lookup(BACKEND_URL_VAR).unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        if backend_url.trim().is_empty() {
            return Err(Error::Config(format!("{BACKEND_URL_VAR} must not be empty")));
        }

        Ok(Self {
            listen_addr,
            backend_url,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        // Defaults are statically valid, parse cannot fail here.
        Self::from_lookup(|_| None).unwrap()
    }
}
