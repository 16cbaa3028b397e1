//! The verb/noun scan.
//!
//! Tokenizes a line, filters stop words, and scans left to right against
//! the vocabulary to produce a [`ParsedCommand`].

use barrow_world::World;

use crate::stopwords::is_stop_word;
use crate::tokenizer::InputTokenizer;
use crate::vocabulary::Vocabulary;

/// The result of parsing one line: what to do, and to what.
///
/// Either field may be `None` when nothing in the line matched that
/// vocabulary; the dispatcher narrates the difference.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    /// The recognized verb, if any. When several verbs appear, the last one
    /// wins.
    pub verb: Option<String>,
    /// The recognized noun, if any. Multi-word nouns ("RUSTY DAGGER") are
    /// matched by joining adjacent tokens.
    pub noun: Option<String>,
}

/// Command parser: stop-word filter plus vocabulary scan.
#[derive(Clone, Debug, Default)]
pub struct CommandParser {
    vocabulary: Vocabulary,
}

impl CommandParser {
    /// Creates a parser with the fixed verb set and seed nouns.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vocabulary: Vocabulary::new(),
        }
    }

    /// Shared access to the vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Rebuilds the noun vocabulary for the player's current room. Call on
    /// every room change.
    pub fn rebuild_nouns(&mut self, world: &World) {
        self.vocabulary.rebuild_nouns(world);
    }

    /// Parses one line of player input.
    ///
    /// Empty input returns `None`: "do nothing", which the dispatcher must
    /// treat differently from `Some` with no verb ("nothing understood").
    #[must_use]
    pub fn parse(&self, input: &str) -> Option<ParsedCommand> {
        if input.is_empty() {
            return None;
        }

        let words: Vec<String> = InputTokenizer::tokenize(input)
            .into_iter()
            .filter(|word| !is_stop_word(word))
            .collect();

        let mut command = ParsedCommand::default();
        for (index, word) in words.iter().enumerate() {
            if self.vocabulary.is_verb(word) {
                command.verb = Some(word.clone());
            } else if self.vocabulary.is_noun(word) {
                command.noun = Some(word.clone());
            } else if let Some(next) = words.get(index + 1) {
                // Two-token lookahead for compound nouns like "FIRE SWORD".
                let joined = format!("{word} {next}");
                if self.vocabulary.is_noun(&joined) {
                    command.noun = Some(joined);
                }
            }
        }

        Some(command)
    }
}
