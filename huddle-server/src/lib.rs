//! Room-scoped WebSocket signaling relay for meeting calls.
//!
//! Peers connect to `GET /ws/meeting/{room_id}`, send WebRTC negotiation
//! frames (offer, answer, ICE candidate) as JSON text, and the relay
//! forwards each frame verbatim to every other member of the same room.
//! It never speaks first and never interprets payloads.
//!
//! ```text
//! ws upgrade (signaling::ws_handler)
//!       |
//!       v
//! connection task, one per peer: classify inbound frames, hand off
//!       |
//!       v
//! BroadcastDispatcher --- members_except ---> RoomRegistry
//!       |
//!       v
//! per-peer outbound queues, each drained by its own connection task
//! ```
//!
//! Platform concerns stay behind narrow seams: [`auth::RoomAuthorizer`]
//! for membership checks, [`observe::EventSink`] for monitoring.

pub mod auth;
pub mod config;
pub mod error;
pub mod observe;
pub mod room;
pub mod router;
pub mod signaling;

pub use auth::{AllowAll, RoomAuthorizer};
pub use config::RelayConfig;
pub use error::RelayError;
pub use observe::{EventSink, LogSink, RelayEvent};
pub use room::{DeliveryError, PeerSender, RoomRegistry};
pub use router::relay_router;
pub use signaling::{BroadcastDispatcher, RelayService, ws_handler};
