//! Predecessor flags of the distance matrix cells.

use std::ops::{BitOr, Index};

/// Set of predecessors that reach a cell at minimal cost.
/// * Bit 0: diagonal `(i-1, j-1)`, consumes a pattern and a text symbol.
/// * Bit 1: top `(i-1, j)`, consumes a pattern symbol against a gap.
/// * Bit 2: left `(i, j-1)`, consumes a text symbol against a gap.
///
/// Several bits may be set when predecessors tie. An empty set means the cell
/// was never computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Direction(u8);

impl Direction {
    /// No predecessor.
    pub const NONE: Direction = Direction(0);
    /// Diagonal predecessor.
    pub const DIAGONAL: Direction = Direction(0b001);
    /// Top predecessor.
    pub const TOP: Direction = Direction(0b010);
    /// Left predecessor.
    pub const LEFT: Direction = Direction(0b100);

    /// Flags of the candidates equal to `min`.
    pub fn from_candidates(diagonal: isize, top: isize, left: isize, min: isize) -> Self {
        let mut dir = Direction::NONE;
        if diagonal == min {
            dir = dir | Direction::DIAGONAL;
        }
        if top == min {
            dir = dir | Direction::TOP;
        }
        if left == min {
            dir = dir | Direction::LEFT;
        }
        dir
    }

    /// Reached from `(i-1, j-1)`.
    pub fn diagonal(self) -> bool {
        self.0 & Direction::DIAGONAL.0 != 0
    }

    /// Reached from `(i-1, j)`.
    pub fn top(self) -> bool {
        self.0 & Direction::TOP.0 != 0
    }

    /// Reached from `(i, j-1)`.
    pub fn left(self) -> bool {
        self.0 & Direction::LEFT.0 != 0
    }

    /// No predecessor, the cell was not computed.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of predecessors, i.e. branching factor during backtrace.
    pub fn count(self) -> usize {
        self.0.count_ones() as usize
    }
}

impl BitOr for Direction {
    type Output = Direction;

    fn bitor(self, rhs: Direction) -> Direction {
        Direction(self.0 | rhs.0)
    }
}

/// Direction flags for every cell of a `(m+1) x (n+1)` matrix.
/// * Rows are pattern positions, columns are text positions, both including the sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionMatrix {
    rows: usize,
    columns: usize,
    cells: Vec<Direction>,
}

impl DirectionMatrix {
    /// Matrix for pattern length `m` and text length `n` with no flags set.
    pub fn new(m: usize, n: usize) -> Self {
        DirectionMatrix {
            rows: m + 1,
            columns: n + 1,
            cells: vec![Direction::NONE; (m + 1) * (n + 1)],
        }
    }

    /// Number of rows, `m + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `n + 1`.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Flags at `(row, column)`, if inside the matrix.
    pub fn get(&self, row: usize, column: usize) -> Option<Direction> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.cells.get(row * self.columns + column).copied()
    }

    /// Record the flags of `(row, column)`.
    pub fn set(&mut self, row: usize, column: usize, dir: Direction) {
        let columns = self.columns;
        self.cells[row * columns + column] = dir;
    }

    /// Row 0 can always be left by consuming text for free.
    pub(crate) fn set_free_start(&mut self) {
        for column in 1..self.columns {
            self.set(0, column, Direction::LEFT);
        }
    }

    /// Flag column 0 of rows `1..=last_row` as reached from above.
    pub(crate) fn set_leading_gaps(&mut self, last_row: usize) {
        for row in 1..=last_row.min(self.rows - 1) {
            self.set(row, 0, Direction::TOP);
        }
    }
}

/// Index into `DirectionMatrix` by (row, column).
impl Index<(usize, usize)> for DirectionMatrix {
    type Output = Direction;

    fn index(&self, index: (usize, usize)) -> &Direction {
        assert!(
            index.0 < self.rows && index.1 < self.columns,
            "Invalid index {index:?}."
        );
        &self.cells[index.0 * self.columns + index.1]
    }
}
