//! Barrow - a small text-adventure engine
//!
//! This crate re-exports all layers of the Barrow system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: barrow_runtime — REPL, line editor, terminal renderer, CLI
//! Layer 2: barrow_engine  — Dispatcher, combat, dice, history, scenario
//! Layer 1: barrow_parser  — Tokenizer, stop words, vocabulary, parser
//! Layer 0: barrow_world   — Items, characters, rooms, the world arena
//! ```

pub use barrow_engine as engine;
pub use barrow_parser as parser;
pub use barrow_runtime as runtime;
pub use barrow_world as world;
