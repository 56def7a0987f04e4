//! Room registry: every live room, keyed by room id.

use std::collections::HashMap;

use tabletop_protocol::{RoomId, RoomListEntry};

use crate::{Room, RoomConfig};

/// Owns all active rooms.
///
/// Rooms are created lazily by the first join to an unseen id and
/// destroyed as soon as their last participant leaves. Nothing survives
/// a restart.
///
/// Like the session manager, this is a plain map with no locking. It is
/// owned by the gateway task, which applies one event at a time.
pub struct RoomRegistry {
    rooms: HashMap<RoomId, Room>,
    config: RoomConfig,
}

impl RoomRegistry {
    /// Creates an empty registry. `config` applies to every room it makes.
    pub fn new(config: RoomConfig) -> Self {
        Self {
            rooms: HashMap::new(),
            config,
        }
    }

    /// Returns the room for `room_id`, building a fresh one first if none
    /// exists.
    pub fn get_or_create(&mut self, room_id: &RoomId) -> &mut Room {
        self.rooms.entry(room_id.clone()).or_insert_with(|| {
            tracing::info!(%room_id, "room created");
            Room::new(room_id.clone(), &self.config)
        })
    }

    pub fn get(&self, room_id: &RoomId) -> Option<&Room> {
        self.rooms.get(room_id)
    }

    pub fn get_mut(&mut self, room_id: &RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(room_id)
    }

    /// Drops a room and all of its state.
    pub fn remove(&mut self, room_id: &RoomId) -> Option<Room> {
        let room = self.rooms.remove(room_id);
        if room.is_some() {
            tracing::info!(%room_id, "room destroyed");
        }
        room
    }

    /// Drops the room if nobody is seated in it. Returns `true` if it was
    /// removed.
    pub fn remove_if_empty(&mut self, room_id: &RoomId) -> bool {
        match self.rooms.get(room_id) {
            Some(room) if room.is_empty() => self.remove(room_id).is_some(),
            _ => false,
        }
    }

    pub fn contains(&self, room_id: &RoomId) -> bool {
        self.rooms.contains_key(room_id)
    }

    /// Listing entries for every room, sorted by room id.
    pub fn list(&self) -> Vec<RoomListEntry> {
        let mut entries: Vec<RoomListEntry> = self.rooms.values().map(Room::info).collect();
        entries.sort_by(|a, b| a.room_id.cmp(&b.room_id));
        entries
    }

    pub fn config(&self) -> &RoomConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new(RoomConfig::default())
    }
}
