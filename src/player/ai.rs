use crate::engine::{Grid, COLS};
use rand::rngs::SmallRng;
use rand::Rng;

use super::{Seat, SeatError};

/// Computer player that picks a column uniformly at random.
///
/// Full columns are not filtered out; choosing one forfeits the turn.
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Seat for RandomPlayer {
    fn name(&self) -> &str {
        "computer"
    }

    fn choose_column(&mut self, rng: &mut SmallRng, _grid: &Grid) -> Result<usize, SeatError> {
        Ok(rng.random_range(0..COLS))
    }
}
