//! The terminal implementation of the engine's renderer seam.

use std::io::{self, Write};

use barrow_engine::{Renderer, SoundCue};

/// Renders narration to stdout and sound cues as dim stage directions.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalRenderer;

impl TerminalRenderer {
    /// Creates a terminal renderer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for TerminalRenderer {
    fn narrate(&mut self, text: &str) {
        println!("{text}");
        let _ = io::stdout().flush();
    }

    fn sound(&mut self, cue: SoundCue) {
        // No speakers here; a cue becomes a stage direction.
        match cue {
            SoundCue::OpenInventory => println!("\x1b[2m* LEATHER CREAKS *\x1b[0m"),
        }
    }
}
