//! Vocabulary storage: the fixed verb set and the room-scoped noun list.
//!
//! Verbs never change. Nouns are rebuilt every time the player's room
//! changes, so the parser only recognizes nouns that something in the
//! current location answers to.

use std::collections::HashSet;

use barrow_world::{Direction, World};

/// Every verb the parser accepts. Most have no dispatcher behavior yet; the
/// dispatcher answers those with its fallback line.
pub const VERBS: &[&str] = &[
    "LOOK", "TAKE", "DROP", "EXAMINE", "SEARCH", "INVENTORY", "I", "OPEN", "CLOSE", "LOCK",
    "UNLOCK", "ASK", "TELL", "SAY", "GIVE", "SHOW", "WAIT", "AGAIN", "ATTACK", "BUY", "COVER",
    "DRINK", "EAT", "FILL", "JUMP", "KISS", "KNOCK", "LISTEN", "MOVE", "PULL", "PUSH", "REMOVE",
    "READ", "SIT", "SLEEP", "STAND", "THROW", "TIE", "TOUCH", "TURN", "UNTIE", "WEAR", "EQUIP",
];

/// The noun every room recognizes for DROP ALL.
pub const ALL_NOUN: &str = "ALL";

/// The verb set and the current room's noun list.
#[derive(Clone, Debug)]
pub struct Vocabulary {
    verbs: HashSet<&'static str>,
    nouns: Vec<String>,
}

impl Vocabulary {
    /// Creates a vocabulary with the fixed verb set and the seed nouns
    /// (cardinal directions plus `ALL`).
    #[must_use]
    pub fn new() -> Self {
        Self {
            verbs: VERBS.iter().copied().collect(),
            nouns: Self::seed_nouns(),
        }
    }

    fn seed_nouns() -> Vec<String> {
        let mut nouns: Vec<String> = Direction::ALL
            .iter()
            .map(|direction| direction.token().to_string())
            .collect();
        nouns.push(ALL_NOUN.to_string());
        nouns
    }

    /// Whether a token is a verb.
    #[must_use]
    pub fn is_verb(&self, token: &str) -> bool {
        self.verbs.contains(token)
    }

    /// Whether a token (or joined token pair) is a recognized noun.
    #[must_use]
    pub fn is_noun(&self, token: &str) -> bool {
        self.nouns.iter().any(|noun| noun == token)
    }

    /// The current noun list, seed nouns first.
    #[must_use]
    pub fn nouns(&self) -> &[String] {
        &self.nouns
    }

    /// The verb set.
    pub fn verbs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.verbs.iter().copied()
    }

    /// Rebuilds the noun list for the player's current room.
    ///
    /// The result is exactly: the four cardinal directions, `ALL`, the
    /// current room's item names, the player's inventory item names, then
    /// each active NPC's name and its inventory item names. Nothing from a
    /// previously visited room survives.
    pub fn rebuild_nouns(&mut self, world: &World) {
        let mut nouns = Self::seed_nouns();
        for item in &world.current_room().items {
            nouns.push(item.name.clone());
        }
        for item in &world.player.character.inventory {
            nouns.push(item.name.clone());
        }
        for npc in &world.npcs {
            nouns.push(npc.name.clone());
            for item in &npc.character.inventory {
                nouns.push(item.name.clone());
            }
        }
        self.nouns = nouns;
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}
