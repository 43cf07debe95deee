//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor, and the listener configuration the binary
//! resolves from its command line.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use tplsvc_registry::Registry;

/// Port the service listens on unless told otherwise.
pub const DEFAULT_PORT: u16 = 3456;

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address to bind.
    pub host: IpAddr,
    /// Port to bind.
    pub port: u16,
}

impl AppConfig {
    /// Socket address the server binds to.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

/// Shared application state passed to all route handlers.
///
/// The registry is immutable after load, so handlers read it concurrently
/// without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
}

impl AppState {
    /// Wrap an already-loaded registry.
    pub fn new(registry: Registry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_listens_on_all_interfaces() {
        let config = AppConfig::default();
        assert_eq!(config.listen_addr().to_string(), "0.0.0.0:3456");
    }

    #[test]
    fn listen_addr_uses_host_and_port() {
        let config = AppConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8080,
        };
        assert_eq!(config.listen_addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn state_clones_share_registry() {
        let state = AppState::new(Registry::default());
        let clone = state.clone();
        assert!(Arc::ptr_eq(&state.registry, &clone.registry));
    }
}
