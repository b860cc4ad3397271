use crate::observe::RelayEvent;
use crate::room::PeerSender;
use crate::signaling::RelayService;
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{Path, State, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use huddle_core::{ConnectionId, RoomId, SignalKind};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// `GET /ws/meeting/{room_id}`: upgrade and hand the socket to its
/// connection task.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    Path(room_id): Path<String>,
    State(service): State<RelayService>,
) -> impl IntoResponse {
    let room_id = RoomId::from(room_id);

    ws.on_upgrade(move |socket| handle_socket(socket, room_id, service))
}

async fn handle_socket(mut socket: WebSocket, room_id: RoomId, service: RelayService) {
    let connection_id = ConnectionId::new();

    if !service.authorizer().may_join(&room_id).await {
        info!("Refused join to room '{}' for {}", room_id, connection_id);
        service.sink().record(RelayEvent::JoinRefused {
            room_id,
            connection_id,
        });
        let _ = socket.send(Message::Close(None)).await;
        return;
    }

    info!("New connection {} in room '{}'", connection_id, room_id);

    let (mut sender, mut receiver) = socket.split();
    let capacity = service.config().send_queue_capacity.max(1);
    let (tx, mut rx) = mpsc::channel(capacity);

    service
        .registry()
        .join(&room_id, PeerSender::new(connection_id, tx));
    service.sink().record(RelayEvent::PeerJoined {
        room_id: room_id.clone(),
        connection_id,
    });

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let service = service.clone();
        let room_id = room_id.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(frame) => match SignalKind::classify(&frame) {
                        Ok(kind) => {
                            service
                                .dispatcher()
                                .broadcast(&room_id, connection_id, kind, frame);
                        }
                        Err(reason) => {
                            debug!("Dropping frame from {}: {}", connection_id, reason);
                            service.sink().record(RelayEvent::FrameDiscarded {
                                room_id: room_id.clone(),
                                connection_id,
                                reason: reason.to_string(),
                            });
                        }
                    },
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    service.registry().leave(&room_id, &connection_id);
    service.sink().record(RelayEvent::PeerLeft {
        room_id: room_id.clone(),
        connection_id,
    });
    info!("Connection {} left room '{}'", connection_id, room_id);
}
