//! The world arena: rooms, the player, and the active NPCs.
//!
//! Rooms are handed out as [`RoomId`] indices into an arena owned by
//! [`World`]. Rooms and NPCs are created once at startup and mutated in
//! place; nothing is destroyed during a session, so plain indices stay valid
//! for the whole run.

use crate::character::{Npc, Player};
use crate::error::{Error, Result};
use crate::item::Item;
use crate::room::{Direction, Room};

/// Opaque handle to a room in the world arena.
///
/// Only [`World::add_room`] mints these, so a `RoomId` always refers to a
/// live room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RoomId(usize);

impl RoomId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }
}

/// The whole mutable game world.
#[derive(Clone, Debug)]
pub struct World {
    rooms: Vec<Room>,
    /// The player character.
    pub player: Player,
    /// Every NPC in play. NPCs are appended at startup and never removed.
    pub npcs: Vec<Npc>,
    current: RoomId,
}

impl World {
    /// Creates a world containing a single starting room, with the player
    /// standing in it and no NPCs.
    #[must_use]
    pub fn new(starting_room: Room) -> Self {
        let start = RoomId(0);
        Self {
            rooms: vec![starting_room],
            player: Player::new(start),
            npcs: Vec::new(),
            current: start,
        }
    }

    /// Adds a room to the arena, returning its handle.
    pub fn add_room(&mut self, room: Room) -> RoomId {
        self.rooms.push(room);
        RoomId(self.rooms.len() - 1)
    }

    /// Connects `from` to `to` in the given direction. One-way; call twice
    /// for a two-way passage.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnknownRoom`](crate::ErrorKind::UnknownRoom) if
    /// either id is out of the arena.
    pub fn link(&mut self, from: RoomId, direction: Direction, to: RoomId) -> Result<()> {
        if to.0 >= self.rooms.len() {
            return Err(Error::unknown_room(to));
        }
        let room = self
            .rooms
            .get_mut(from.0)
            .ok_or_else(|| Error::unknown_room(from))?;
        room.exits.insert(direction, to);
        Ok(())
    }

    /// The room the player is currently in.
    #[must_use]
    pub fn current(&self) -> RoomId {
        self.current
    }

    /// Shared access to a room.
    #[must_use]
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    /// Mutable access to a room.
    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.0]
    }

    /// Shared access to the current room.
    #[must_use]
    pub fn current_room(&self) -> &Room {
        self.room(self.current)
    }

    /// Mutable access to the current room.
    pub fn current_room_mut(&mut self) -> &mut Room {
        self.room_mut(self.current)
    }

    /// Moves the player (and the notion of "here") to the given room.
    pub fn enter(&mut self, id: RoomId) {
        self.current = id;
        self.player.character.location = id;
    }

    /// Walks the player through the current room's exit in `direction`.
    ///
    /// Returns the new room id, or `None` when there is no exit that way
    /// (the caller narrates the wall).
    pub fn move_player(&mut self, direction: Direction) -> Option<RoomId> {
        let destination = self.current_room().exit(direction)?;
        self.enter(destination);
        Some(destination)
    }

    /// Picks the named item up off the current room's floor into the
    /// player's inventory. Returns the item's display name on success.
    pub fn take_from_room(&mut self, name: &str) -> Option<String> {
        let item = self.current_room_mut().remove_item(name)?;
        let taken = item.name.clone();
        self.player.character.give(item);
        Some(taken)
    }

    /// Moves the named item from the player's inventory onto the current
    /// room's floor. Returns the item's display name on success.
    pub fn drop_to_room(&mut self, name: &str) -> Option<String> {
        let item = self.player.character.take_from_inventory(name)?;
        let dropped = item.name.clone();
        self.current_room_mut().add_item(item);
        Some(dropped)
    }

    /// Empties the player's whole inventory onto the current room's floor,
    /// returning the dropped names in order. The held slot stays put.
    pub fn drop_all_to_room(&mut self) -> Vec<String> {
        let items: Vec<Item> = self.player.character.inventory.drain(..).collect();
        let mut dropped = Vec::with_capacity(items.len());
        for item in items {
            dropped.push(item.name.clone());
            self.current_room_mut().add_item(item);
        }
        dropped
    }

    /// Finds an NPC by display name.
    #[must_use]
    pub fn npc_index(&self, name: &str) -> Option<usize> {
        self.npcs.iter().position(|npc| npc.name == name)
    }
}
