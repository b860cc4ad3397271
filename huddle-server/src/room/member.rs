use axum::extract::ws::Message;
use huddle_core::ConnectionId;
use thiserror::Error;
use tokio::sync::mpsc;

/// Why a frame could not be queued for one room member.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum DeliveryError {
    /// The member's outbound queue is full; its reader is stalled.
    #[error("outbound queue full")]
    QueueFull,
    /// The member's connection task has already shut down.
    #[error("connection closed")]
    Disconnected,
}

/// Handle on one room member's outbound queue.
///
/// The connection task owns the receiving end and is the only writer to
/// the actual WebSocket; everything else reaches the member through
/// this sender.
#[derive(Debug, Clone)]
pub struct PeerSender {
    connection_id: ConnectionId,
    tx: mpsc::Sender<Message>,
}

impl PeerSender {
    pub fn new(connection_id: ConnectionId, tx: mpsc::Sender<Message>) -> Self {
        Self { connection_id, tx }
    }

    pub fn connection_id(&self) -> ConnectionId {
        self.connection_id
    }

    /// Queues a frame without blocking. Delivery is best effort: a full
    /// queue drops the frame instead of back-pressuring the sender's room.
    pub fn send(&self, message: Message) -> Result<(), DeliveryError> {
        self.tx.try_send(message).map_err(|err| match err {
            mpsc::error::TrySendError::Full(_) => DeliveryError::QueueFull,
            mpsc::error::TrySendError::Closed(_) => DeliveryError::Disconnected,
        })
    }
}
