use crate::observe::{EventSink, RelayEvent};
use crate::room::RoomRegistry;
use axum::extract::ws::{Message, Utf8Bytes};
use huddle_core::{ConnectionId, RoomId, SignalKind};
use std::sync::Arc;
use tracing::debug;

/// Fans one sender's frame out to the rest of its room.
#[derive(Clone)]
pub struct BroadcastDispatcher {
    registry: Arc<RoomRegistry>,
    sink: Arc<dyn EventSink>,
}

impl BroadcastDispatcher {
    pub fn new(registry: Arc<RoomRegistry>, sink: Arc<dyn EventSink>) -> Self {
        Self { registry, sink }
    }

    /// Queues `frame` verbatim for every member of `room_id` except
    /// `sender`, and returns how many members accepted it.
    ///
    /// Failures are per recipient: a full or closed queue is reported
    /// to the sink and the loop moves on. Nothing here can fail the
    /// sender, and the whole fan-out is synchronous, so cancelling the
    /// sender's task cannot split it.
    pub fn broadcast(
        &self,
        room_id: &RoomId,
        sender: ConnectionId,
        kind: SignalKind,
        frame: Utf8Bytes,
    ) -> usize {
        let recipients = self.registry.members_except(room_id, &sender);
        let mut delivered = 0;

        for recipient in &recipients {
            match recipient.send(Message::Text(frame.clone())) {
                Ok(()) => delivered += 1,
                Err(reason) => {
                    self.sink.record(RelayEvent::DeliveryFailed {
                        room_id: room_id.clone(),
                        sender,
                        recipient: recipient.connection_id(),
                        kind,
                        reason,
                    });
                }
            }
        }

        debug!(
            "Forwarded {} from {} to {}/{} member(s) of '{}'",
            kind,
            sender,
            delivered,
            recipients.len(),
            room_id
        );
        delivered
    }
}
