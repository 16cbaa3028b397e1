//! The interactive read-dispatch loop.

use std::io::{self, Write};

use barrow_engine::Game;
use barrow_world::Result;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::terminal::TerminalRenderer;

/// The interactive game session.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The game being played.
    game: Game,

    /// The terminal the game narrates through.
    renderer: TerminalRenderer,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// The input prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(game: Game) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, game))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a REPL with the given editor.
    pub fn with_editor(editor: E, game: Game) -> Self {
        Self {
            editor,
            game,
            renderer: TerminalRenderer::new(),
            show_banner: true,
            prompt: "> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Shared access to the game.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the session until Ctrl+D.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            Self::print_banner();
        }

        self.game.intro(&mut self.renderer);

        loop {
            match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => {
                    // The game speaks in upper case; so does the player.
                    let line = line.trim().to_uppercase();
                    if line.is_empty() {
                        continue;
                    }
                    self.editor.add_history(&line);
                    self.game.handle_line(&line, &mut self.renderer);
                }
                ReadResult::Interrupted => {
                    println!();
                }
                ReadResult::Eof => break,
            }
        }

        println!("\nFAREWELL.");
        Ok(())
    }

    fn print_banner() {
        println!("\x1b[1;33m");
        println!(" ____");
        println!("| __ )  __ _ _ __ _ __ _____      __");
        println!("|  _ \\ / _` | '__| '__/ _ \\ \\ /\\ / /");
        println!("| |_) | (_| | |  | | | (_) \\ V  V /");
        println!("|____/ \\__,_|_|  |_|  \\___/ \\_/\\_/");
        println!("\x1b[0m");
        println!("Barrow v{}", env!("CARGO_PKG_VERSION"));
        println!("Type commands to play. Use Ctrl+D to quit.\n");

        let _ = io::stdout().flush();
    }
}
