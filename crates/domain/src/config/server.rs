use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// `host:port`, `[v6]:port` or `:port` for all interfaces
    #[serde(default = "default_listen_address")]
    pub listen_address: String,

    #[serde(default = "default_true")]
    pub udp: bool,

    #[serde(default)]
    pub tcp: bool,

    /// Idle TCP connections are closed after this many seconds
    #[serde(default = "default_tcp_idle_timeout")]
    pub tcp_idle_timeout_secs: u64,
}

impl ServerConfig {
    /// Resolve the listen address, treating a missing host as `0.0.0.0`.
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        let address = self.listen_address.trim();
        let full = if address.starts_with(':') {
            format!("0.0.0.0{}", address)
        } else {
            address.to_string()
        };
        full.parse::<SocketAddr>()
            .map_err(|e| format!("Invalid listen address '{}': {}", self.listen_address, e))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: default_listen_address(),
            udp: true,
            tcp: false,
            tcp_idle_timeout_secs: default_tcp_idle_timeout(),
        }
    }
}

fn default_listen_address() -> String {
    ":53".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tcp_idle_timeout() -> u64 {
    10
}
