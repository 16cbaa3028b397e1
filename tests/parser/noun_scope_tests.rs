//! Room-scoped noun vocabulary tests.
//!
//! The noun list is rebuilt on every room change and must contain exactly
//! the seed nouns plus everything nameable in the new location.

use barrow_parser::CommandParser;
use barrow_world::{Item, Npc, Room, World};

fn furnished_world() -> World {
    let mut world = World::new(Room::new("tomb", "A DARK CHAMBER."));
    world
        .current_room_mut()
        .add_item(Item::new("BONES", "A PILE OF OLD BONES."));
    world
        .player
        .character
        .give(Item::weapon("RUSTY DAGGER", "A DAGGER.", 3));

    let mut deck = Npc::new(world.current(), "DECK", "AN ELF.");
    deck.character.give(Item::magic("FIREBALL", "A BALL OF FIRE", 100));
    deck.character.hold("FIREBALL");
    deck.character.give(Item::new("TORCH", "A TORCH."));
    world.npcs.push(deck);
    world
}

#[test]
fn vocabulary_is_exactly_the_current_scope() {
    let world = furnished_world();
    let mut parser = CommandParser::new();
    parser.rebuild_nouns(&world);

    // Directions + ALL + room items + player inventory + NPC name + NPC
    // inventory. The NPC's held FIREBALL is not in its inventory, so it is
    // not a noun.
    assert_eq!(
        parser.vocabulary().nouns(),
        &["NORTH", "EAST", "SOUTH", "WEST", "ALL", "BONES", "RUSTY DAGGER", "DECK", "TORCH"]
    );
}

#[test]
fn stale_nouns_do_not_survive_a_room_change() {
    let mut world = furnished_world();
    let mut parser = CommandParser::new();
    parser.rebuild_nouns(&world);

    let command = parser.parse("examine bones").unwrap();
    assert_eq!(command.noun.as_deref(), Some("BONES"));

    let hell = world.add_room(Room::new("hell", "A BLOOD-RED CAVERN."));
    world.enter(hell);
    parser.rebuild_nouns(&world);

    // The bones stayed behind in the tomb.
    let command = parser.parse("examine bones").unwrap();
    assert_eq!(command.verb.as_deref(), Some("EXAMINE"));
    assert_eq!(command.noun, None);

    // The companion and the player's own gear travel.
    let command = parser.parse("examine deck").unwrap();
    assert_eq!(command.noun.as_deref(), Some("DECK"));
    let command = parser.parse("examine rusty dagger").unwrap();
    assert_eq!(command.noun.as_deref(), Some("RUSTY DAGGER"));
}

#[test]
fn same_item_name_in_two_rooms_is_fine() {
    let mut world = World::new(Room::new("tomb", "A DARK CHAMBER."));
    world
        .current_room_mut()
        .add_item(Item::new("BONES", "TOMB BONES."));
    let hell = world.add_room(Room::new("hell", "A BLOOD-RED CAVERN."));
    world
        .room_mut(hell)
        .add_item(Item::new("BONES", "HELL BONES."));

    let mut parser = CommandParser::new();
    parser.rebuild_nouns(&world);
    assert!(parser.vocabulary().is_noun("BONES"));

    world.enter(hell);
    parser.rebuild_nouns(&world);
    assert!(parser.vocabulary().is_noun("BONES"));
}
