//! Error types for the Barrow system.
//!
//! Uses `thiserror` for ergonomic error definition. These errors live at the
//! edges of the system (world construction, line editing, batch IO); inside
//! the dispatcher a failed lookup is narration, never an `Err`.

use thiserror::Error;

use crate::world::RoomId;

/// The main error type for Barrow operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an unknown-room error.
    #[must_use]
    pub fn unknown_room(id: RoomId) -> Self {
        Self::new(ErrorKind::UnknownRoom(id))
    }

    /// Creates an internal error from any message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A room id that was never handed out by the world arena.
    #[error("unknown room: {0:?}")]
    UnknownRoom(RoomId),

    /// Failure in the surrounding machinery (editor, IO, CLI).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result alias using the Barrow error type.
pub type Result<T> = std::result::Result<T, Error>;
