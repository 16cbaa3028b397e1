//! Rooms and the directions that connect them.

use std::collections::HashMap;
use std::fmt;

use crate::item::Item;
use crate::world::RoomId;

/// A cardinal direction. These are the only exit keys and the only direction
/// nouns the parser seeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// North.
    North,
    /// East.
    East,
    /// South.
    South,
    /// West.
    West,
}

impl Direction {
    /// All four directions, in the order the noun vocabulary lists them.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Parses an upper-cased token into a direction.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "NORTH" => Some(Self::North),
            "EAST" => Some(Self::East),
            "SOUTH" => Some(Self::South),
            "WEST" => Some(Self::West),
            _ => None,
        }
    }

    /// The token form of this direction.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A single location in the world.
#[derive(Clone, Debug)]
pub struct Room {
    /// Short key for the room. Only used by frontends to pick an audio
    /// track; never shown to the player.
    pub name: String,
    /// Prose shown on LOOK and on entering.
    pub description: String,
    /// Items lying here, available to TAKE.
    pub items: Vec<Item>,
    /// Adjacent rooms. Rooms form a shared graph, possibly cyclic.
    pub exits: HashMap<Direction, RoomId>,
}

impl Room {
    /// Creates an empty room with no exits.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            items: Vec::new(),
            exits: HashMap::new(),
        }
    }

    /// The room reached by walking in `direction`, if there is an exit.
    #[must_use]
    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        self.exits.get(&direction).copied()
    }

    /// Adds an item to the floor.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes the named item from the floor, returning it for whatever
    /// container takes it next.
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        let index = self.items.iter().position(|item| item.name == name)?;
        Some(self.items.remove(index))
    }
}
