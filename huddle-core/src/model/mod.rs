mod peer;
mod room;
mod signal;

pub use peer::ConnectionId;
pub use room::RoomId;
pub use signal::{SignalKind, SignalMessage, SignalParseError};
