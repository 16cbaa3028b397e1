//! Terminal frontend and CLI for Barrow.
//!
//! This crate is the rendering/audio/input collaborator the engine narrates
//! through: a rustyline-backed line editor, a terminal renderer, and the
//! read-dispatch loop that feeds completed lines to the game.
//!
//! # Modules
//!
//! - [`editor`] - Line editor abstraction over rustyline
//! - [`terminal`] - The terminal implementation of the engine's renderer seam
//! - [`repl`] - The interactive read-dispatch loop

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod repl;
pub mod terminal;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
pub use terminal::TerminalRenderer;
