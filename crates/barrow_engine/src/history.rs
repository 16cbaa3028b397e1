//! Command history.
//!
//! Two stacks: submitted lines pile onto the past stack, and scrolling back
//! through them moves lines onto a redo buffer so scrolling forward can
//! return them. Recording a new line first drains the redo buffer back, so
//! history always reads in submission order. Pure data-structure work; the
//! dispatcher never sees it.

use barrow_world::Stack;

/// Scrollable history of submitted command lines.
#[derive(Clone, Debug, Default)]
pub struct CommandHistory {
    past: Stack<String>,
    ahead: Stack<String>,
}

impl CommandHistory {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a submitted line, rewinding any in-progress scroll first.
    pub fn record(&mut self, line: impl Into<String>) {
        while let Some(recalled) = self.ahead.pop() {
            self.past.push(recalled);
        }
        self.past.push(line.into());
    }

    /// Scrolls one step back, returning the line to show. `None` at the
    /// oldest entry.
    pub fn previous(&mut self) -> Option<String> {
        let line = self.past.pop()?;
        self.ahead.push(line.clone());
        Some(line)
    }

    /// Scrolls one step forward, returning the line to show. `None` when
    /// back at the newest entry (the caller shows an empty prompt).
    pub fn next(&mut self) -> Option<String> {
        let line = self.ahead.pop()?;
        self.past.push(line.clone());
        Some(line)
    }

    /// The number of recorded lines, wherever the scroll position is.
    #[must_use]
    pub fn len(&self) -> usize {
        self.past.len() + self.ahead.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
