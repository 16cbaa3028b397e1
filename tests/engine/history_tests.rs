//! Command history tests.

use barrow_engine::{BufferedRenderer, CommandHistory, Game, ScriptedDice, scenario};

#[test]
fn scroll_back_and_forward_round_trips() {
    let mut history = CommandHistory::new();
    history.record("LOOK");
    history.record("TAKE TORCH");

    assert_eq!(history.previous().as_deref(), Some("TAKE TORCH"));
    assert_eq!(history.previous().as_deref(), Some("LOOK"));
    assert_eq!(history.previous(), None);

    assert_eq!(history.next().as_deref(), Some("LOOK"));
    assert_eq!(history.next().as_deref(), Some("TAKE TORCH"));
    assert_eq!(history.next(), None);
}

#[test]
fn recording_mid_scroll_keeps_submission_order() {
    let mut history = CommandHistory::new();
    history.record("LOOK");
    history.record("WAIT");
    history.previous();
    history.previous();

    history.record("SIT");

    let mut lines = Vec::new();
    while let Some(line) = history.previous() {
        lines.push(line);
    }
    assert_eq!(lines, vec!["SIT", "WAIT", "LOOK"]);
}

#[test]
fn the_game_records_every_submitted_line() {
    let opening = scenario::opening().unwrap();
    let mut game = Game::with_dice(opening.world, opening.defeat_room, ScriptedDice::new());
    let mut out = BufferedRenderer::new();

    game.handle_line("LOOK", &mut out);
    game.handle_line("GIBBERISH WORDS", &mut out);
    game.handle_line("", &mut out);

    // Two real lines; the empty one never reaches history.
    assert_eq!(game.history_mut().len(), 2);
    assert_eq!(game.history_mut().previous().as_deref(), Some("GIBBERISH WORDS"));
    assert_eq!(game.history_mut().previous().as_deref(), Some("LOOK"));
}
