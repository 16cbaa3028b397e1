//! Injectable randomness.
//!
//! Everything random in the game - attack rolls, flavor-text selection -
//! flows through the [`Dice`] trait, so a session can be reproduced from a
//! seed and a test can script exact outcomes.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A uniform random source for the game.
pub trait Dice {
    /// Rolls one twenty-sided die: a value in `1..=20`.
    fn d20(&mut self) -> i32;

    /// Picks an index uniformly from `0..len`. Returns 0 when `len` is 0.
    fn pick(&mut self, len: usize) -> usize;
}

/// Production dice: a ChaCha8 generator from an explicit seed.
#[derive(Clone, Debug)]
pub struct SeededDice {
    rng: ChaCha8Rng,
}

impl SeededDice {
    /// Creates dice from a seed. The same seed replays the same session.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Dice for SeededDice {
    fn d20(&mut self) -> i32 {
        self.rng.gen_range(1..=20)
    }

    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

/// Dice that replay a fixed script of outcomes, for tests and demos.
///
/// When a script runs dry, `d20` rolls 1 (a guaranteed miss) and `pick`
/// returns 0.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<i32>,
    picks: VecDeque<usize>,
}

impl ScriptedDice {
    /// Creates dice with empty scripts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues d20 rolls, first in first rolled.
    #[must_use]
    pub fn with_rolls(mut self, rolls: impl IntoIterator<Item = i32>) -> Self {
        self.rolls.extend(rolls);
        self
    }

    /// Queues pick results, first in first picked.
    #[must_use]
    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }
}

impl Dice for ScriptedDice {
    fn d20(&mut self) -> i32 {
        self.rolls.pop_front().unwrap_or(1)
    }

    fn pick(&mut self, len: usize) -> usize {
        let pick = self.picks.pop_front().unwrap_or(0);
        if len == 0 { 0 } else { pick.min(len - 1) }
    }
}
