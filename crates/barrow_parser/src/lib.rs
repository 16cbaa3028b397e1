//! Natural language command parser for Barrow.
//!
//! This crate turns a line of player input into a `(verb, noun)` pair the
//! dispatcher can act on.
//!
//! # Architecture
//!
//! ```text
//! "TAKE THE RUSTY DAGGER"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["TAKE", "THE", "RUSTY", "DAGGER"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ STOP-WORD       │  → ["TAKE", "RUSTY", "DAGGER"]
//! │ FILTER          │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ VOCABULARY      │  → verb TAKE; "RUSTY" + "DAGGER" join to the
//! │ SCAN            │    multi-word noun "RUSTY DAGGER"
//! └─────────────────┘
//!          │
//!          ▼
//!   ParsedCommand { verb: Some("TAKE"), noun: Some("RUSTY DAGGER") }
//! ```
//!
//! The verb set is fixed; the noun list is rebuilt on every room change so
//! the parser only ever recognizes nouns relevant to the player's current
//! location.
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert raw input to upper-cased word tokens
//! - [`stopwords`] - The fixed stop-word table
//! - [`vocabulary`] - Verb set and rebuildable room-scoped noun list
//! - [`parser`] - The verb/noun scan

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod parser;
pub mod stopwords;
pub mod tokenizer;
pub mod vocabulary;


pub use parser::{CommandParser, ParsedCommand};
pub use tokenizer::InputTokenizer;
pub use vocabulary::Vocabulary;
