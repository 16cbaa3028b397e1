//! Command dispatcher tests against the opening scenario.

use barrow_engine::{BufferedRenderer, Game, ScriptedDice, SoundCue, scenario};

fn game() -> Game<ScriptedDice> {
    game_with(ScriptedDice::new())
}

fn game_with(dice: ScriptedDice) -> Game<ScriptedDice> {
    let opening = scenario::opening().unwrap();
    Game::with_dice(opening.world, opening.defeat_room, dice)
}

#[test]
fn empty_input_appends_no_narration() {
    let mut game = game();
    let mut out = BufferedRenderer::new();

    game.handle_line("", &mut out);

    assert!(out.lines.is_empty());
    assert!(game.transcript().is_empty());
}

#[test]
fn unknown_words_are_not_a_verb() {
    let mut game = game();
    let mut out = BufferedRenderer::new();

    game.handle_line("FLOOP THE DAGGER", &mut out);

    assert_eq!(out.last_line(), Some("THAT'S NOT A VERB I RECOGNIZE."));
}

#[test]
fn examine_searches_room_then_inventory_then_npcs() {
    let mut game = game();
    let mut out = BufferedRenderer::new();

    game.handle_line("EXAMINE SHABBY JERKIN", &mut out);
    assert_eq!(
        out.last_line(),
        Some("A TATTERED AND DIRTY JERKIN. IT PROVIDES LITTLE PROTECTION.")
    );

    game.handle_line("EXAMINE DECK", &mut out);
    assert!(out.last_line().unwrap().starts_with("DECK IS A TALL"));

    game.handle_line("EXAMINE NORTH", &mut out);
    assert_eq!(out.last_line(), Some("YOU SEE NO SUCH THING."));
}

#[test]
fn equip_then_examine_finds_the_held_item() {
    let mut game = game();
    let mut out = BufferedRenderer::new();

    game.handle_line("EQUIP RUSTY DAGGER", &mut out);
    assert_eq!(out.last_line(), Some("YOU ARE NOW HOLDING THE RUSTY DAGGER."));

    let player = &game.world().player.character;
    assert_eq!(player.holding.as_ref().map(|i| i.name.as_str()), Some("RUSTY DAGGER"));
    assert!(!player.inventory.iter().any(|i| i.name == "RUSTY DAGGER"));

    game.handle_line("EXAMINE RUSTY DAGGER", &mut out);
    assert_eq!(
        out.last_line(),
        Some("A SHODDILY CRAFTED DAGGER. SLIGHTLY MORE IMPOSING THAN A FINGERNAIL.")
    );
}

#[test]
fn equip_something_not_carried_is_refused() {
    let mut game = game();
    let mut out = BufferedRenderer::new();

    game.handle_line("EQUIP TORCH", &mut out);

    assert_eq!(
        out.last_line(),
        Some("YOU DON'T HAVE ANY SUCH THING IN YOUR INVENTORY, SO YOU CAN'T EQUIP IT.")
    );
}

#[test]
fn drop_all_confirms_once_per_item() {
    let mut game = game();
    let mut out = BufferedRenderer::new();

    game.handle_line("DROP ALL", &mut out);

    assert_eq!(
        out.lines,
        vec!["YOU DROP THE RUSTY DAGGER.", "YOU DROP THE SHABBY JERKIN."]
    );
    assert!(game.world().player.character.inventory.is_empty());
    assert_eq!(game.world().current_room().items.len(), 2);
}

#[test]
fn dropped_items_can_be_taken_back() {
    let mut game = game();
    let mut out = BufferedRenderer::new();

    game.handle_line("DROP RUSTY DAGGER", &mut out);
    assert_eq!(out.last_line(), Some("YOU DROP THE RUSTY DAGGER."));

    game.handle_line("TAKE RUSTY DAGGER", &mut out);
    assert_eq!(out.last_line(), Some("YOU TAKE THE RUSTY DAGGER."));
    assert!(game.world().current_room().items.is_empty());
}

#[test]
fn drop_something_not_carried_is_refused() {
    let mut game = game();
    let mut out = BufferedRenderer::new();

    game.handle_line("DROP TORCH", &mut out);

    assert_eq!(
        out.last_line(),
        Some("YOU AREN'T CARRYING ANY SUCH THING, SO YOU CAN'T DROP IT.")
    );
}

#[test]
fn inventory_narrates_and_cues_the_sound() {
    let mut game = game();
    let mut out = BufferedRenderer::new();

    game.handle_line("INVENTORY", &mut out);

    assert_eq!(
        out.last_line(),
        Some("YOU ARE CARRYING: RUSTY DAGGER, SHABBY JERKIN")
    );
    assert_eq!(out.cues, vec![SoundCue::OpenInventory]);
}

#[test]
fn sit_twice_keeps_the_flag_and_changes_the_line() {
    let mut game = game();
    let mut out = BufferedRenderer::new();

    game.handle_line("SIT", &mut out);
    game.handle_line("SIT", &mut out);

    assert_eq!(
        out.lines,
        vec![
            "YOU SIT DOWN.",
            "YOU ARE ALREADY SITTING. ARE YOU TRYING TO PHASE THROUGH THE GROUND?"
        ]
    );
    assert!(game.world().player.sitting);
}

#[test]
fn wait_is_uniform_over_four_lines() {
    for pick in 0..4 {
        let mut game = game_with(ScriptedDice::new().with_picks([pick]));
        let mut out = BufferedRenderer::new();
        game.handle_line("WAIT", &mut out);
        assert_eq!(out.last_line(), Some(barrow_engine::game::WAIT_LINES[pick]));
    }
}

#[test]
fn attack_without_a_weapon_fails_but_still_provokes() {
    let mut game = game();
    let mut out = BufferedRenderer::new();

    game.handle_line("ATTACK DECK", &mut out);

    assert_eq!(
        out.lines,
        vec!["DECK IS NOW HOSTILE.", "YOU AREN'T HOLDING A WEAPON."]
    );
    assert!(game.world().npcs[0].hostile);
    assert!(game.in_combat());
    assert_eq!(game.world().npcs[0].character.health, 100);
}

#[test]
fn attack_on_a_missing_target() {
    let mut game = game();
    let mut out = BufferedRenderer::new();

    game.handle_line("ATTACK NORTH", &mut out);

    assert_eq!(out.last_line(), Some("YOU SEE NO SUCH TARGET."));
    assert!(!game.in_combat());
}
