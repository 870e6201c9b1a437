use super::{
    common::{GameResult, MoveError, Player},
    detector::{DiagonalMode, WinDetector},
    grid::{DropOutcome, Grid},
};

/// What a single call to [`GameEngine::play`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The chosen column was full; the piece rolled off and the turn passed.
    Forfeited { player: Player, column: usize },
    /// The piece landed and the grid was evaluated.
    Placed {
        player: Player,
        row: usize,
        column: usize,
        result: GameResult,
    },
}

impl Turn {
    pub fn player(&self) -> Player {
        match self {
            Turn::Forfeited { player, .. } | Turn::Placed { player, .. } => *player,
        }
    }
}

/// Core game logic: the grid, whose turn it is, and the round counter.
#[derive(Debug, Clone)]
pub struct GameEngine {
    grid: Grid,
    detector: WinDetector,
    current: Player,
    round: usize,
    result: GameResult,
}

impl GameEngine {
    /// Start a new game with an empty grid and `Red` to move.
    pub fn new(mode: DiagonalMode) -> Self {
        Self {
            grid: Grid::new(),
            detector: WinDetector::new(mode),
            current: Player::Red,
            round: 1,
            result: GameResult::InProgress,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Current round, starting at 1. Forfeited turns do not advance it.
    pub fn round(&self) -> usize {
        self.round
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn is_finished(&self) -> bool {
        self.result.is_terminal()
    }

    pub fn mode(&self) -> DiagonalMode {
        self.detector.mode()
    }

    /// Drop the current player's piece into `column` and evaluate the result.
    pub fn play(&mut self, column: usize) -> Result<Turn, MoveError> {
        if self.is_finished() {
            return Err(MoveError::GameOver);
        }

        let player = self.current;
        match self.grid.drop_piece(column, player)? {
            DropOutcome::RolledOff { column } => {
                log::info!("{} chose full column {} and forfeits the turn", player, column);
                self.current = player.other();
                Ok(Turn::Forfeited { player, column })
            }
            DropOutcome::Landed { row, column } => {
                let result = self
                    .detector
                    .evaluate(&self.grid, row, column, player, self.grid.filled());
                self.result = result;
                if result.is_terminal() {
                    log::info!("game over in round {}: {}", self.round, result);
                } else {
                    self.current = player.other();
                    self.round += 1;
                }
                Ok(Turn::Placed {
                    player,
                    row,
                    column,
                    result,
                })
            }
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(DiagonalMode::default())
    }
}
