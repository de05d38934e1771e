//! Common types for Connect Four: markers, positions, grid errors and outcomes.

use core::fmt;

/// Opaque identifier of the player occupying a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Marker {
    First,
    Second,
}

impl Marker {
    /// The opposing marker.
    pub const fn other(self) -> Self {
        match self {
            Marker::First => Marker::Second,
            Marker::Second => Marker::First,
        }
    }

    /// Stable index (0 or 1), used to address per-marker tables.
    pub const fn index(self) -> usize {
        match self {
            Marker::First => 0,
            Marker::Second => 1,
        }
    }
}

/// Cell coordinate. Row 0 is the top of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Errors returned by grid placement. Both kinds are recoverable and leave the
/// grid untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Column index outside `[0, columns)`.
    InvalidColumn { column: usize, columns: usize },
    /// The column has no empty cell left.
    ColumnFull { column: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidColumn { column, columns } => write!(
                f,
                "column {} is out of range (choose 1-{})",
                column + 1,
                columns
            ),
            GridError::ColumnFull { column } => {
                write!(f, "column {} is full, try another", column + 1)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}

/// State of a round after the most recent placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    InProgress,
    Win(Marker),
    Draw,
}

impl Outcome {
    /// `Win` and `Draw` end the round.
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub const fn winner(self) -> Option<Marker> {
        match self {
            Outcome::Win(marker) => Some(marker),
            _ => None,
        }
    }
}
