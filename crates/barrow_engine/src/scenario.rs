//! Construction of the opening world.
//!
//! Everything is built here, explicitly, at startup: rooms, the player's
//! starting gear, and the NPCs. No world object exists before this runs.

use barrow_world::{Direction, Item, Npc, Result, Room, RoomId, World};

/// The built opening world plus the ids the game needs to keep.
#[derive(Clone, Debug)]
pub struct Opening {
    /// The world, with the player standing in the tomb.
    pub world: World,
    /// Where a defeated player wakes up.
    pub defeat_room: RoomId,
}

/// Builds the opening scenario: the tomb, the defeat cavern below it, the
/// player's starting gear, and the companion DECK.
///
/// # Errors
///
/// Returns an error only if the room graph is linked inconsistently, which
/// would be a bug in this function.
pub fn opening() -> Result<Opening> {
    let mut world = World::new(Room::new(
        "tomb",
        "YOU ARE IN A DARK CHAMBER WITH ROUGH WALLS. YOUR COMPANION, DECK, HOLDS A \
         SPUTTERING TORCH THAT PROVIDES THE ONLY LIGHT HERE. THE AIR IS STILL, \
         SMELLS OF DEATH, AND EACH INHALE FEELS AS THOUGH IT ADDS A LAYER OF DUST IN \
         YOUR LUNGS. YOU SEE A PASSAGE TO THE NORTH, AND TWO SMALLER CREVICES TO THE \
         EAST AND WEST THAT YOU THINK YOU COULD FIT THROUGH. ",
    ));
    let tomb = world.current();

    let hell = world.add_room(Room::new(
        "hell",
        "YOU WAKE UP IN A PILE OF BONES. YOU ARE IN A LARGE, BLOOD-RED CAVERN WITH A \
         CEILING SO FAR AWAY THAT IT'S CONCEALED BY FOG. IT SMELLS OF SULFUR AND \
         BURNING FLESH. THERE IS A SMALL PASSAGE TO THE NORTH AND A LARGE \
         EBONY DOOR TO THE EAST.",
    ));
    // The cavern's northern passage climbs back up into the tomb.
    world.link(hell, Direction::North, tomb)?;

    world.player.character.give(Item::weapon(
        "RUSTY DAGGER",
        "A SHODDILY CRAFTED DAGGER. SLIGHTLY MORE IMPOSING THAN A FINGERNAIL.",
        3,
    ));
    world.player.character.give(Item::armor(
        "SHABBY JERKIN",
        "A TATTERED AND DIRTY JERKIN. IT PROVIDES LITTLE PROTECTION.",
        1,
    ));

    let mut deck = Npc::new(
        tomb,
        "DECK",
        "DECK IS A TALL, SLENDER, ELF WITH DARK EYES, WITH A SHOCK OF DARK EMERALD \
         HAIR AND A RESTING WORRY FACE. HE HAS BEEN TRAVELLING WITH YOU IN SEARCH \
         OF TREASURE AND GLORY. ONE OF THE GOOD GUYS.",
    );
    deck.character.give(Item::magic("FIREBALL", "A BALL OF FIRE", 100));
    deck.character.hold("FIREBALL");
    deck.character
        .give(Item::new("TORCH", "A RAMSHACKLE TORCH. IT GIVES OFF A DIM LIGHT."));
    world.npcs.push(deck);

    Ok(Opening {
        world,
        defeat_room: hell,
    })
}
