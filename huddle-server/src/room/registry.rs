use crate::room::PeerSender;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use huddle_core::{ConnectionId, RoomId};
use std::collections::HashMap;
use tracing::debug;

/// In-memory map from room name to its current members.
///
/// Rooms exist only while someone is in them: the first `join` creates
/// the entry, removing the last member deletes it. Every mutation runs
/// under the room's shard lock, so join, leave and `members_except`
/// are linearizable per room. Fan-out happens on the senders returned
/// by [`RoomRegistry::members_except`], after the lock is gone.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: DashMap<RoomId, HashMap<ConnectionId, PeerSender>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self {
            rooms: DashMap::new(),
        }
    }

    /// Adds a member, creating the room on first join. Joining the same
    /// room twice with one connection keeps a single membership.
    pub fn join(&self, room_id: &RoomId, member: PeerSender) {
        let mut members = self.rooms.entry(room_id.clone()).or_default();
        members.insert(member.connection_id(), member);
        debug!("Room '{}' now has {} member(s)", room_id, members.len());
    }

    /// Removes a member; the room entry disappears with its last member.
    /// Unknown rooms and non-members are a no-op.
    pub fn leave(&self, room_id: &RoomId, connection_id: &ConnectionId) {
        if let Entry::Occupied(mut room) = self.rooms.entry(room_id.clone()) {
            room.get_mut().remove(connection_id);
            if room.get().is_empty() {
                room.remove();
                debug!("Room '{}' is empty, removed", room_id);
            }
        }
    }

    /// Current members of `room_id` minus `excluded`, cloned out for
    /// fan-out. Empty for unknown rooms.
    pub fn members_except(&self, room_id: &RoomId, excluded: &ConnectionId) -> Vec<PeerSender> {
        match self.rooms.get(room_id) {
            Some(members) => members
                .values()
                .filter(|member| member.connection_id() != *excluded)
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }

    /// Rooms that currently have members.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Connections across all rooms.
    pub fn connection_count(&self) -> usize {
        self.rooms.iter().map(|room| room.value().len()).sum()
    }

    /// Members currently in one room, 0 if it does not exist.
    pub fn member_count(&self, room_id: &RoomId) -> usize {
        self.rooms.get(room_id).map_or(0, |members| members.len())
    }
}
