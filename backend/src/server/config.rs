//! HTTP server configuration derived from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default bind host.
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
/// Default bind port.
const DEFAULT_PORT: u16 = 4000;

/// Server configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address the server binds to.
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(DEFAULT_HOST, DEFAULT_PORT),
        }
    }
}

impl ServerConfig {
    /// Read configuration from `HOST`/`PORT`, falling back to the defaults
    /// for unset or unparseable values.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST")
            .ok()
            .and_then(|raw| raw.parse::<IpAddr>().ok())
            .unwrap_or(DEFAULT_HOST);
        let port = std::env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        Self {
            bind_addr: SocketAddr::new(host, port),
        }
    }
}
