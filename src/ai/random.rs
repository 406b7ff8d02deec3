use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::agent::Agent;
use crate::game::Board;

/// Pick a legal column uniformly at random. `None` when every column is full.
pub fn choose_column<R: Rng>(board: &Board, rng: &mut R) -> Option<usize> {
    let legal = board.legal_columns();
    if legal.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..legal.len());
    Some(legal[idx])
}

/// An agent that selects uniformly at random from legal columns.
pub struct RandomAgent<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomAgent<R> {
    /// Use the given random source, e.g. a seeded generator in tests.
    pub fn with_rng(rng: R) -> Self {
        RandomAgent { rng }
    }
}

impl RandomAgent<StdRng> {
    pub fn from_os_rng() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomAgent<StdRng> {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl<R: Rng> Agent for RandomAgent<R> {
    fn select_column(&mut self, board: &Board) -> Option<usize> {
        choose_column(board, &mut self.rng)
    }

    fn name(&self) -> &str {
        "Random"
    }
}
