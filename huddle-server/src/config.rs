use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Runtime settings of the relay. Defaults run out of the box for local
/// development.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Address the HTTP/WebSocket listener binds to.
    pub bind: SocketAddr,
    /// Capacity of each connection's outbound queue. Frames for a peer
    /// whose queue is full are dropped, so a stalled reader cannot hold
    /// up its room. Must be at least 1.
    pub send_queue_capacity: usize,
    /// Exact origin allowed by CORS. `None` allows any origin, which is
    /// the development posture; deployments behind a browser front end
    /// should pin it.
    pub allowed_origin: Option<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 8000)),
            send_queue_capacity: 64,
            allowed_origin: None,
        }
    }
}
