//! Full verb/noun scan tests.

use barrow_parser::{CommandParser, ParsedCommand};
use barrow_world::{Item, Room, World};

fn parser_with_room_items(names: &[&str]) -> CommandParser {
    let mut world = World::new(Room::new("tomb", "A DARK CHAMBER."));
    for name in names {
        world
            .current_room_mut()
            .add_item(Item::new(*name, "SOMETHING."));
    }
    let mut parser = CommandParser::new();
    parser.rebuild_nouns(&world);
    parser
}

#[test]
fn empty_input_is_no_result_at_all() {
    let parser = CommandParser::new();
    assert_eq!(parser.parse(""), None);
}

#[test]
fn stop_words_alone_are_nothing_understood() {
    let parser = CommandParser::new();
    assert_eq!(
        parser.parse("the of and to"),
        Some(ParsedCommand::default())
    );
}

#[test]
fn non_alphabetic_tokens_alone_are_nothing_understood() {
    let parser = CommandParser::new();
    assert_eq!(parser.parse("12 34 !?"), Some(ParsedCommand::default()));
}

#[test]
fn verb_recognized_with_noise_on_both_sides() {
    let parser = parser_with_room_items(&["TORCH"]);
    let command = parser.parse("quickly grab um take that little torch").unwrap();
    assert_eq!(command.verb.as_deref(), Some("TAKE"));
    assert_eq!(command.noun.as_deref(), Some("TORCH"));
}

#[test]
fn multiple_verbs_last_one_wins() {
    let parser = parser_with_room_items(&[]);
    let command = parser.parse("look examine wait").unwrap();
    assert_eq!(command.verb.as_deref(), Some("WAIT"));
}

#[test]
fn compound_noun_matches_through_lookahead() {
    let parser = parser_with_room_items(&["FIRE SWORD"]);
    let command = parser.parse("take the fire sword").unwrap();
    assert_eq!(command.verb.as_deref(), Some("TAKE"));
    assert_eq!(command.noun.as_deref(), Some("FIRE SWORD"));
}

#[test]
fn single_half_of_a_compound_noun_is_not_enough() {
    let parser = parser_with_room_items(&["FIRE SWORD"]);
    let command = parser.parse("take fire").unwrap();
    assert_eq!(command.verb.as_deref(), Some("TAKE"));
    assert_eq!(command.noun, None);
}

#[test]
fn inventory_alias_is_a_single_letter() {
    let parser = CommandParser::new();
    let command = parser.parse("i").unwrap();
    assert_eq!(command.verb.as_deref(), Some("I"));
}

#[test]
fn drop_all_parses_with_the_all_noun() {
    let parser = CommandParser::new();
    let command = parser.parse("drop all").unwrap();
    assert_eq!(command.verb.as_deref(), Some("DROP"));
    assert_eq!(command.noun.as_deref(), Some("ALL"));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    /// Filler that can never match the vocabulary: stop words.
    fn filler() -> impl Strategy<Value = String> {
        prop::sample::select(barrow_parser::stopwords::STOP_WORDS).prop_map(str::to_string)
    }

    proptest! {
        #[test]
        fn take_torch_survives_any_amount_of_filler(
            before in prop::collection::vec(filler(), 0..8),
            between in prop::collection::vec(filler(), 0..8),
            after in prop::collection::vec(filler(), 0..8),
        ) {
            let parser = parser_with_room_items(&["TORCH"]);

            let mut words = before;
            words.push("take".to_string());
            words.extend(between);
            words.push("torch".to_string());
            words.extend(after);

            let command = parser.parse(&words.join(" ")).expect("non-empty input");
            prop_assert_eq!(command.verb.as_deref(), Some("TAKE"));
            prop_assert_eq!(command.noun.as_deref(), Some("TORCH"));
        }
    }
}
