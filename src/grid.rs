//! Grid state: gravity placement, win scanning and fill detection.
//!
//! Each marker owns one occupancy bitboard. A cell holds at most one marker,
//! so the two boards never intersect.

use crate::bitboard::BitBoard;
use crate::common::{GridError, Marker, Position};
use crate::config::{Dimensions, MAX_DIMENSION, RUN_LENGTH};
use core::fmt;

type BB = BitBoard<u128, MAX_DIMENSION>;

/// Scan directions as (row step, column step): right, down, down-right,
/// down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Read-only snapshot of a grid, used for rendering and for restoring engines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridState {
    pub dimensions: Dimensions,
    pub first: BB,
    pub second: BB,
}

impl GridState {
    pub fn rows(&self) -> usize {
        self.dimensions.rows()
    }

    pub fn columns(&self) -> usize {
        self.dimensions.columns()
    }

    /// Marker at (row, column); anything outside the grid reads as empty.
    pub fn cell(&self, row: usize, column: usize) -> Option<Marker> {
        if row >= self.rows() || column >= self.columns() {
            None
        } else if self.first.contains(row, column) {
            Some(Marker::First)
        } else if self.second.contains(row, column) {
            Some(Marker::Second)
        } else {
            None
        }
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Option<Marker>> + '_ {
        (0..self.columns()).map(move |column| self.cell(row, column))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Option<Marker>> + '_ {
        (0..self.rows()).flat_map(move |row| self.row(row))
    }
}

impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            for cell in self.row(row) {
                let ch = match cell {
                    None => '.',
                    Some(Marker::First) => 'X',
                    Some(Marker::Second) => 'O',
                };
                write!(f, "{}", ch)?;
            }
            if row + 1 < self.rows() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// The board engine. Owns the grid and is the only thing allowed to mutate it.
#[derive(Clone, PartialEq, Eq)]
pub struct GridEngine {
    dimensions: Dimensions,
    first: BB,
    second: BB,
}

impl GridEngine {
    /// Create an empty grid; both dimensions are clamped to `[4, 10]`.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self::with_dimensions(Dimensions::new(rows, columns))
    }

    pub fn with_dimensions(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            first: BB::new(),
            second: BB::new(),
        }
    }

    pub fn rows(&self) -> usize {
        self.dimensions.rows()
    }

    pub fn columns(&self) -> usize {
        self.dimensions.columns()
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    fn layer(&self, marker: Marker) -> &BB {
        match marker {
            Marker::First => &self.first,
            Marker::Second => &self.second,
        }
    }

    fn layer_mut(&mut self, marker: Marker) -> &mut BB {
        match marker {
            Marker::First => &mut self.first,
            Marker::Second => &mut self.second,
        }
    }

    fn occupied(&self) -> BB {
        self.first | self.second
    }

    /// Marker at (row, column); anything outside the grid reads as empty.
    pub fn cell(&self, row: usize, column: usize) -> Option<Marker> {
        self.render().cell(row, column)
    }

    /// True iff `column` is on the grid and its top cell is empty.
    pub fn is_column_playable(&self, column: usize) -> bool {
        column < self.columns() && !self.occupied().contains(0, column)
    }

    /// Columns that can still take a marker, left to right.
    pub fn playable_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.columns()).filter(move |&column| self.is_column_playable(column))
    }

    /// Drop `marker` into `column`. It lands in the lowest empty row.
    pub fn place_marker(&mut self, column: usize, marker: Marker) -> Result<Position, GridError> {
        let columns = self.columns();
        if column >= columns {
            return Err(GridError::InvalidColumn { column, columns });
        }
        let occupied = self.occupied();
        let row = (0..self.rows())
            .rev()
            .find(|&row| !occupied.contains(row, column))
            .ok_or(GridError::ColumnFull { column })?;
        self.layer_mut(marker).insert(row, column);
        log::trace!("{:?} dropped into column {} at row {}", marker, column, row);
        Ok(Position::new(row, column))
    }

    /// Step from (row, column) by (dr, dc), staying on the grid.
    fn offset(&self, row: usize, column: usize, dr: isize, dc: isize) -> Option<(usize, usize)> {
        let r = row.checked_add_signed(dr)?;
        let c = column.checked_add_signed(dc)?;
        (r < self.rows() && c < self.columns()).then_some((r, c))
    }

    /// Whether `RUN_LENGTH` cells starting at (row, column) all belong to
    /// `marker` when walking in direction (dr, dc).
    fn run_from(&self, marker: Marker, row: usize, column: usize, (dr, dc): (isize, isize)) -> bool {
        let layer = self.layer(marker);
        let (mut r, mut c) = (row, column);
        for _ in 1..RUN_LENGTH {
            match self.offset(r, c, dr, dc) {
                Some((nr, nc)) if layer.contains(nr, nc) => {
                    r = nr;
                    c = nc;
                }
                _ => return false,
            }
        }
        true
    }

    /// Full scan: every occupied cell is tried as the start of a run in each
    /// of the four directions. Returns the first marker found.
    pub fn detect_winner(&self) -> Option<Marker> {
        for row in 0..self.rows() {
            for column in 0..self.columns() {
                let Some(marker) = self.cell(row, column) else {
                    continue;
                };
                if DIRECTIONS
                    .iter()
                    .any(|&direction| self.run_from(marker, row, column, direction))
                {
                    return Some(marker);
                }
            }
        }
        None
    }

    /// Number of consecutive `layer` cells beyond `position` in one direction.
    fn stretch(&self, layer: &BB, position: Position, dr: isize, dc: isize) -> usize {
        let mut count = 0;
        let (mut r, mut c) = (position.row, position.column);
        while let Some((nr, nc)) = self.offset(r, c, dr, dc) {
            if !layer.contains(nr, nc) {
                break;
            }
            count += 1;
            (r, c) = (nr, nc);
        }
        count
    }

    /// Check only the four lines through `position`. After a placement on a
    /// grid without a winner this gives the same answer as
    /// [`detect_winner`](Self::detect_winner) in constant time.
    pub fn winner_through(&self, position: Position) -> Option<Marker> {
        let marker = self.cell(position.row, position.column)?;
        let layer = self.layer(marker);
        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| {
                1 + self.stretch(layer, position, dr, dc) + self.stretch(layer, position, -dr, -dc)
                    >= RUN_LENGTH
            })
            .then_some(marker)
    }

    /// True iff every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.occupied().count_ones() == self.dimensions.cells()
    }

    /// Number of cells holding `marker`.
    pub fn count(&self, marker: Marker) -> usize {
        self.layer(marker).count_ones()
    }

    /// Empty every cell; dimensions are kept.
    pub fn reset(&mut self) {
        self.first.clear_all();
        self.second.clear_all();
    }

    /// Row-major snapshot for display. Never mutates.
    pub fn render(&self) -> GridState {
        GridState::from(self)
    }
}

impl Default for GridEngine {
    fn default() -> Self {
        Self::with_dimensions(Dimensions::default())
    }
}

impl fmt::Debug for GridEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "GridEngine {{ rows: {}, columns: {} }}",
            self.rows(),
            self.columns()
        )?;
        write!(f, "{}", self.render())
    }
}

impl From<&GridEngine> for GridState {
    fn from(grid: &GridEngine) -> Self {
        GridState {
            dimensions: grid.dimensions,
            first: grid.first,
            second: grid.second,
        }
    }
}

impl From<GridState> for GridEngine {
    /// Cells outside the snapshot's dimensions are dropped, and a cell claimed
    /// by both markers keeps the first one.
    fn from(state: GridState) -> Self {
        let mut grid = GridEngine::with_dimensions(state.dimensions);
        for (row, column) in state.first.iter_set_bits() {
            if row < grid.rows() && column < grid.columns() {
                grid.first.insert(row, column);
            }
        }
        for (row, column) in state.second.iter_set_bits() {
            if row < grid.rows() && column < grid.columns() && !grid.first.contains(row, column) {
                grid.second.insert(row, column);
            }
        }
        grid
    }
}
