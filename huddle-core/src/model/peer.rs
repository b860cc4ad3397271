use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of one live connection to the relay.
///
/// Minted server-side when the socket is accepted, never taken from the
/// client. It keys the room registry and is what broadcast compares
/// against to leave the sender out.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Hash, Eq, PartialEq)]
pub struct ConnectionId(pub Uuid);

impl ConnectionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
