//! Tokenizer tests.
//!
//! Tests for converting raw input to upper-cased word tokens.

use barrow_parser::InputTokenizer;

#[test]
fn tokenize_simple_command() {
    assert_eq!(InputTokenizer::tokenize("take torch"), vec!["TAKE", "TORCH"]);
}

#[test]
fn tokenize_upper_cases_mixed_input() {
    assert_eq!(
        InputTokenizer::tokenize("Take The Torch"),
        vec!["TAKE", "THE", "TORCH"]
    );
}

#[test]
fn tokenize_strips_punctuation_and_digits() {
    assert_eq!(
        InputTokenizer::tokenize("take the torch, quickly!! (x2)"),
        vec!["TAKE", "THE", "TORCH", "QUICKLY"]
    );
}

#[test]
fn tokenize_empty_input() {
    assert!(InputTokenizer::tokenize("").is_empty());
    assert!(InputTokenizer::tokenize(" \t \n ").is_empty());
}
