use async_trait::async_trait;
use huddle_core::RoomId;

/// Hook for the surrounding platform to vet a join before the peer is
/// registered anywhere.
///
/// The relay treats room names as pre-authorized capability strings;
/// user identity, tokens and meeting membership live outside it. This
/// trait is where such a check plugs in.
#[async_trait]
pub trait RoomAuthorizer: Send + Sync {
    /// Whether a fresh connection may join `room_id`. Returning `false`
    /// closes the socket before the peer enters the registry.
    async fn may_join(&self, room_id: &RoomId) -> bool;
}

/// Accepts every join. The default when no platform check is wired in.
#[derive(Debug, Default, Clone)]
pub struct AllowAll;

#[async_trait]
impl RoomAuthorizer for AllowAll {
    async fn may_join(&self, _room_id: &RoomId) -> bool {
        true
    }
}
