//! Input tokenization.
//!
//! Converts raw player input into a stream of upper-cased word tokens.

/// Tokenizes player input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a raw input string into upper-cased words.
    ///
    /// - Splits on whitespace and punctuation
    /// - Upper-cases every word
    /// - Discards tokens that are not purely alphabetic ("2", "x4", "!!")
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<String> {
        input
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty() && word.chars().all(char::is_alphabetic))
            .map(str::to_uppercase)
            .collect()
    }
}
