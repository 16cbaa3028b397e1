//! Items and their kind tags.
//!
//! The source of truth for what an item *is* lives in [`ItemKind`] rather
//! than a type hierarchy: a weapon is an item whose kind carries a damage
//! value, armor carries a rating, magic carries spell damage.

use std::fmt;

/// What an item is, with kind-specific data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemKind {
    /// Scenery and miscellany with no mechanical effect.
    Plain,
    /// A melee weapon.
    Weapon {
        /// Damage dealt on a normal hit.
        damage: i32,
    },
    /// Wearable protection. The rating is carried but not yet consulted by
    /// combat math.
    Armor {
        /// Protection rating.
        rating: i32,
    },
    /// An inexhaustible spell.
    Magic {
        /// Damage dealt by the spell.
        damage: i32,
    },
}

/// A single game item.
///
/// The name doubles as the item's display key: upper-case, unique within any
/// one container, and the token the parser recognizes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    /// Display name, also the parser noun.
    pub name: String,
    /// Prose shown by EXAMINE.
    pub description: String,
    /// Kind tag with kind-specific fields.
    pub kind: ItemKind,
}

impl Item {
    /// Creates a plain item.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: ItemKind::Plain,
        }
    }

    /// Creates a weapon.
    #[must_use]
    pub fn weapon(name: impl Into<String>, description: impl Into<String>, damage: i32) -> Self {
        Self {
            kind: ItemKind::Weapon { damage },
            ..Self::new(name, description)
        }
    }

    /// Creates armor.
    #[must_use]
    pub fn armor(name: impl Into<String>, description: impl Into<String>, rating: i32) -> Self {
        Self {
            kind: ItemKind::Armor { rating },
            ..Self::new(name, description)
        }
    }

    /// Creates a spell.
    #[must_use]
    pub fn magic(name: impl Into<String>, description: impl Into<String>, damage: i32) -> Self {
        Self {
            kind: ItemKind::Magic { damage },
            ..Self::new(name, description)
        }
    }

    /// Damage this item deals when swung. `None` unless it is a weapon.
    #[must_use]
    pub fn melee_damage(&self) -> Option<i32> {
        match self.kind {
            ItemKind::Weapon { damage } => Some(damage),
            _ => None,
        }
    }

    /// Damage this item deals when cast. `None` unless it is magic.
    #[must_use]
    pub fn spell_damage(&self) -> Option<i32> {
        match self.kind {
            ItemKind::Magic { damage } => Some(damage),
            _ => None,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
