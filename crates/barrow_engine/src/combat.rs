//! Combat resolution.
//!
//! Melee follows the d20 procedure: a natural 20 is a critical hit for
//! double damage that always connects, any roll at or above the defender's
//! armor class is a normal hit, anything else misses. Spells need no roll
//! and always connect. Damage is subtracted directly from defender health
//! with no floor here; the combat round handler owns defeat.
//!
//! `name: None` on either side means the player, which picks the
//! second-person framing of the narration.

use barrow_world::Item;

use crate::dice::Dice;

/// The attacking side of an exchange: who they are and what they hold.
#[derive(Clone, Copy, Debug)]
pub struct Attacker<'a> {
    /// The attacker's display name; `None` for the player.
    pub name: Option<&'a str>,
    /// The attacker's held item, if any.
    pub holding: Option<&'a Item>,
}

/// The defending side of an exchange.
#[derive(Debug)]
pub struct Defender<'a> {
    /// The defender's display name; `None` for the player.
    pub name: Option<&'a str>,
    /// Health to subtract damage from. May go negative here.
    pub health: &'a mut i32,
    /// Threshold a d20 roll must meet to land a hit.
    pub armor_class: i32,
}

enum Outcome {
    Critical,
    Hit,
    Miss,
}

/// Resolves a melee swing, applying damage and returning the narration.
///
/// The attacker must hold a weapon-kind item; anything else (empty hands,
/// armor, a spell) narrates a failed attack with no damage.
pub fn melee_attack(attacker: Attacker<'_>, defender: Defender<'_>, dice: &mut dyn Dice) -> String {
    let Some(damage) = attacker.holding.and_then(Item::melee_damage) else {
        return match attacker.name {
            None => "YOU AREN'T HOLDING A WEAPON.".to_string(),
            Some(name) => format!("{name} TRIED TO ATTACK BUT ISN'T HOLDING A WEAPON."),
        };
    };

    let roll = dice.d20();
    let outcome = if roll == 20 {
        Outcome::Critical
    } else if roll >= defender.armor_class {
        Outcome::Hit
    } else {
        Outcome::Miss
    };

    let dealt = match outcome {
        Outcome::Critical => damage * 2,
        Outcome::Hit => damage,
        Outcome::Miss => 0,
    };
    *defender.health -= dealt;

    match (attacker.name, defender.name) {
        (None, Some(target)) => match outcome {
            Outcome::Critical => format!("YOU CRIT {target} FOR {dealt} DAMAGE!"),
            Outcome::Hit => format!("YOU HIT {target} FOR {dealt} DAMAGE!"),
            Outcome::Miss => format!("YOUR ATTACK MISSED {target}!"),
        },
        (Some(name), None) => match outcome {
            Outcome::Critical => format!("{name} CRIT YOU FOR {dealt} DAMAGE!"),
            Outcome::Hit => format!("{name} HIT YOU FOR {dealt} DAMAGE!"),
            Outcome::Miss => format!("{name}'S ATTACK MISSED YOU!"),
        },
        (Some(name), Some(target)) => match outcome {
            Outcome::Critical => format!("{name} CRIT {target} FOR {dealt} DAMAGE!"),
            Outcome::Hit => format!("{name} HIT {target} FOR {dealt} DAMAGE!"),
            Outcome::Miss => format!("{name}'S ATTACK MISSED {target}!"),
        },
        (None, None) => match outcome {
            Outcome::Critical => format!("YOU CRIT YOURSELF FOR {dealt} DAMAGE!"),
            Outcome::Hit => format!("YOU HIT YOURSELF FOR {dealt} DAMAGE!"),
            Outcome::Miss => "YOUR ATTACK MISSED YOURSELF!".to_string(),
        },
    }
}

/// Resolves a spell attack, applying damage and returning the narration.
///
/// The attacker must hold a magic-kind item; anything else narrates a
/// forgotten spell with no damage. Spells roll no die.
pub fn spell_attack(attacker: Attacker<'_>, defender: Defender<'_>) -> String {
    let charm = attacker
        .holding
        .and_then(|item| item.spell_damage().map(|damage| (item, damage)));
    let Some((spell, damage)) = charm else {
        return match attacker.name {
            None => "YOU TRIED TO MAKE A SPELL ATTACK BUT FORGOT HOW.".to_string(),
            Some(name) => format!("{name} TRIED TO MAKE A SPELL ATTACK BUT FORGOT HOW."),
        };
    };

    *defender.health -= damage;

    match (attacker.name, defender.name) {
        (Some(name), None) => {
            format!("{name} HIT YOU WITH A {} SPELL FOR {damage} DAMAGE!", spell.name)
        }
        (Some(name), Some(target)) => format!("{name} HIT {target} FOR {damage} DAMAGE!"),
        (None, Some(target)) => {
            format!("YOU HIT {target} WITH A {} SPELL FOR {damage} DAMAGE!", spell.name)
        }
        (None, None) => format!("YOU HIT YOURSELF WITH A {} SPELL FOR {damage} DAMAGE!", spell.name),
    }
}
