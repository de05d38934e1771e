/// Smallest allowed number of rows or columns.
pub const MIN_DIMENSION: usize = 4;
/// Largest allowed number of rows or columns; also the bitboard stride.
pub const MAX_DIMENSION: usize = 10;
pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLUMNS: usize = 7;
/// Consecutive same-marker cells needed to win.
pub const RUN_LENGTH: usize = 4;

/// Clamp a requested dimension into `[MIN_DIMENSION, MAX_DIMENSION]`.
pub const fn clamp_dimension(value: usize) -> usize {
    if value < MIN_DIMENSION {
        MIN_DIMENSION
    } else if value > MAX_DIMENSION {
        MAX_DIMENSION
    } else {
        value
    }
}

/// Grid size. Construction always clamps, so a `Dimensions` value is valid by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    rows: usize,
    columns: usize,
}

impl Dimensions {
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows: clamp_dimension(rows),
            columns: clamp_dimension(columns),
        }
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    pub const fn cells(&self) -> usize {
        self.rows * self.columns
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLUMNS)
    }
}
