//! Lifecycle and delivery events for external monitoring.
//!
//! The relay reports what happened to it and nothing more; sinks must
//! be cheap and non-blocking because `record` runs on connection tasks.

use crate::room::DeliveryError;
use huddle_core::{ConnectionId, RoomId, SignalKind};
use tracing::{debug, info, warn};

/// One event record handed to the sink.
#[derive(Debug, Clone)]
pub enum RelayEvent {
    /// A peer finished the handshake and entered a room.
    PeerJoined {
        room_id: RoomId,
        connection_id: ConnectionId,
    },
    /// A peer left its room, whatever the disconnect cause.
    PeerLeft {
        room_id: RoomId,
        connection_id: ConnectionId,
    },
    /// The authorizer turned a connection away before it joined.
    JoinRefused {
        room_id: RoomId,
        connection_id: ConnectionId,
    },
    /// An inbound frame was dropped instead of forwarded.
    FrameDiscarded {
        room_id: RoomId,
        connection_id: ConnectionId,
        reason: String,
    },
    /// A forwarded frame could not be queued for one recipient.
    DeliveryFailed {
        room_id: RoomId,
        sender: ConnectionId,
        recipient: ConnectionId,
        kind: SignalKind,
        reason: DeliveryError,
    },
}

/// Where the relay reports its events.
pub trait EventSink: Send + Sync {
    /// Accepts one event record. Must not block.
    fn record(&self, event: RelayEvent);
}

/// Default sink: structured log output, nothing else.
#[derive(Debug, Default, Clone)]
pub struct LogSink;

impl EventSink for LogSink {
    fn record(&self, event: RelayEvent) {
        match event {
            RelayEvent::PeerJoined {
                room_id,
                connection_id,
            } => {
                info!(room = %room_id, connection = %connection_id, "peer joined");
            }
            RelayEvent::PeerLeft {
                room_id,
                connection_id,
            } => {
                info!(room = %room_id, connection = %connection_id, "peer left");
            }
            RelayEvent::JoinRefused {
                room_id,
                connection_id,
            } => {
                warn!(room = %room_id, connection = %connection_id, "join refused");
            }
            RelayEvent::FrameDiscarded {
                room_id,
                connection_id,
                reason,
            } => {
                debug!(room = %room_id, connection = %connection_id, %reason, "frame discarded");
            }
            RelayEvent::DeliveryFailed {
                room_id,
                sender,
                recipient,
                kind,
                reason,
            } => {
                warn!(
                    room = %room_id,
                    %sender,
                    %recipient,
                    kind = %kind,
                    %reason,
                    "delivery failed"
                );
            }
        }
    }
}
