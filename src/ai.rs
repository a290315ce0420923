//! Computer opponent that plays a uniformly random empty cell.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Board, Pos};

/// Picks moves uniformly at random with no lookahead or evaluation.
#[derive(Debug)]
pub struct RandomAi {
    rng: StdRng,
}

impl RandomAi {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic variant for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A uniformly random empty cell, or `None` when the board is full.
    pub fn pick(&mut self, board: &Board) -> Option<Pos> {
        let open: Vec<Pos> = board.empty_cells().collect();
        open.choose(&mut self.rng).copied()
    }
}

impl Default for RandomAi {
    fn default() -> Self {
        Self::new()
    }
}
