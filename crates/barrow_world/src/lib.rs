//! Entities and world state for Barrow.
//!
//! This crate provides:
//! - [`Item`] - items tagged by kind (plain, weapon, armor, magic)
//! - [`Character`], [`Player`], [`Npc`] - the things that fight and carry
//! - [`Room`], [`Direction`], [`World`] - the room graph and its arena
//! - [`Stack`] - the LIFO used for command history
//! - [`Error`] - edge-of-system error types
//!
//! An item lives in exactly one of: a character's inventory, a character's
//! held slot, or a room's item list. Moving `Item` values between those
//! containers is the only transfer mechanism, so the invariant holds by
//! construction.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod character;
pub mod error;
pub mod item;
pub mod room;
pub mod stack;
pub mod world;

pub use character::{Character, Npc, Player};
pub use error::{Error, ErrorKind, Result};
pub use item::{Item, ItemKind};
pub use room::{Direction, Room};
pub use stack::Stack;
pub use world::{RoomId, World};
