//! Characters: the shared capability set plus player/NPC specializations.
//!
//! [`Character`] carries what every combatant has - health, an inventory, a
//! held slot, a location, an armor class. [`Player`] and [`Npc`] embed it and
//! add their own data.

use crate::item::Item;
use crate::world::RoomId;

/// Health every character starts with.
pub const STARTING_HEALTH: i32 = 100;

/// Armor class every character starts with.
pub const STARTING_ARMOR_CLASS: i32 = 10;

/// The capability set shared by the player and every NPC.
#[derive(Clone, Debug)]
pub struct Character {
    /// Hit points. Starts at 100, never clamped above; the combat round
    /// handler clamps a defeated player back up to 1.
    pub health: i32,
    /// Items carried but not wielded.
    pub inventory: Vec<Item>,
    /// The single item actively wielded. Never simultaneously in
    /// `inventory`.
    pub holding: Option<Item>,
    /// The room this character is in.
    pub location: RoomId,
    /// Threshold a d20 roll must meet to land a hit on this character.
    pub armor_class: i32,
}

impl Character {
    /// Creates a character at the given location with default stats and
    /// empty hands.
    #[must_use]
    pub fn new(location: RoomId) -> Self {
        Self {
            health: STARTING_HEALTH,
            inventory: Vec::new(),
            holding: None,
            location,
            armor_class: STARTING_ARMOR_CLASS,
        }
    }

    /// Adds an item to the inventory.
    pub fn give(&mut self, item: Item) {
        self.inventory.push(item);
    }

    /// Moves the named inventory item into the held slot.
    ///
    /// Anything previously held goes back into the inventory, so the item is
    /// never in both places and nothing is destroyed. Returns `false` when no
    /// inventory item has that name.
    pub fn hold(&mut self, name: &str) -> bool {
        let Some(index) = self.inventory.iter().position(|item| item.name == name) else {
            return false;
        };
        let item = self.inventory.remove(index);
        if let Some(previous) = self.holding.take() {
            self.inventory.push(previous);
        }
        self.holding = Some(item);
        true
    }

    /// Removes the named item from the inventory, returning it for whatever
    /// container takes it next. The held slot is not searched.
    pub fn take_from_inventory(&mut self, name: &str) -> Option<Item> {
        let index = self.inventory.iter().position(|item| item.name == name)?;
        Some(self.inventory.remove(index))
    }

    /// Names of everything carried: the held item first, then the inventory
    /// in order.
    pub fn carried_names(&self) -> impl Iterator<Item = &str> {
        self.holding
            .iter()
            .chain(self.inventory.iter())
            .map(|item| item.name.as_str())
    }
}

/// The player character.
#[derive(Clone, Debug)]
pub struct Player {
    /// Shared combatant state.
    pub character: Character,
    /// Whether the player is sitting down.
    pub sitting: bool,
}

impl Player {
    /// Creates a standing player at the given location.
    #[must_use]
    pub fn new(location: RoomId) -> Self {
        Self {
            character: Character::new(location),
            sitting: false,
        }
    }
}

/// A non-player character.
#[derive(Clone, Debug)]
pub struct Npc {
    /// Shared combatant state.
    pub character: Character,
    /// Display name, also the parser noun.
    pub name: String,
    /// Prose shown by EXAMINE.
    pub description: String,
    /// Flips permanently true the first time the player attacks this NPC.
    pub hostile: bool,
}

impl Npc {
    /// Creates a non-hostile NPC at the given location.
    #[must_use]
    pub fn new(
        location: RoomId,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            character: Character::new(location),
            name: name.into(),
            description: description.into(),
            hostile: false,
        }
    }
}
