//! Shared vocabulary of the huddle signaling relay: identifiers and the
//! wire-level message classification used by both the server and test
//! clients.

pub mod model;

pub use model::{ConnectionId, RoomId, SignalKind, SignalMessage, SignalParseError};
