use crate::{
    common::{GridError, Marker, Outcome, Position},
    grid::GridEngine,
};
use core::fmt;
use rand::Rng;

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The grid rejected the column; the same player moves again.
    Grid(GridError),
    /// The round already has a winner or is drawn.
    Finished,
}

impl From<GridError> for MoveError {
    fn from(err: GridError) -> Self {
        MoveError::Grid(err)
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Grid(e) => write!(f, "{}", e),
            MoveError::Finished => write!(f, "the round is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}

/// A successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub marker: Marker,
    pub position: Position,
    pub outcome: Outcome,
}

/// One round of play: the grid, whose turn it is, and the current outcome.
#[derive(Debug, Clone)]
pub struct Round {
    grid: GridEngine,
    current: Marker,
    outcome: Outcome,
    moves: usize,
}

impl Round {
    /// Start a round on `grid` with `first` to move. The grid is emptied.
    pub fn new(mut grid: GridEngine, first: Marker) -> Self {
        grid.reset();
        Self {
            grid,
            current: first,
            outcome: Outcome::InProgress,
            moves: 0,
        }
    }

    pub fn grid(&self) -> &GridEngine {
        &self.grid
    }

    /// Marker whose turn it is. Once the round ends this is the marker that
    /// made the final move.
    pub fn current(&self) -> Marker {
        self.current
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Successful placements so far this round.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Apply the current marker to `column`. The winner is checked before the
    /// draw, and the turn passes only while the round is still in progress.
    pub fn play(&mut self, column: usize) -> Result<Turn, MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::Finished);
        }
        let marker = self.current;
        let position = self.grid.place_marker(column, marker)?;
        self.moves += 1;

        self.outcome = if let Some(winner) = self.grid.detect_winner() {
            Outcome::Win(winner)
        } else if self.grid.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        };

        if self.outcome.is_terminal() {
            log::debug!("round over after {} moves: {:?}", self.moves, self.outcome);
        } else {
            self.current = marker.other();
        }

        Ok(Turn {
            marker,
            position,
            outcome: self.outcome,
        })
    }

    /// Pick a uniformly random playable column, or `None` when the grid is
    /// full. Used for simulated playouts.
    pub fn random_column<R: Rng>(&self, rng: &mut R) -> Option<usize> {
        let playable = self.grid.playable_columns().count();
        if playable == 0 {
            return None;
        }
        let pick = rng.random_range(0..playable);
        self.grid.playable_columns().nth(pick)
    }

    /// Empty the grid for a replay. The marker that made the last move of the
    /// previous round opens the next one.
    pub fn restart(&mut self) {
        self.grid.reset();
        self.outcome = Outcome::InProgress;
        self.moves = 0;
    }
}
