//! The [`Cell`] type: a single `(row, col)` coordinate on the warehouse floor.

use std::fmt;

/// A 2D integer grid coordinate.
///
/// `row` is the first axis and `col` the second. Cells carry no state of
/// their own; they compare and hash by value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Create a new cell.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a cell shifted by (drow, dcol), or `None` if a coordinate
    /// leaves the `i32` range.
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Option<Self> {
        match (self.row.checked_add(drow), self.col.checked_add(dcol)) {
            (Some(row), Some(col)) => Some(Self { row, col }),
            _ => None,
        }
    }

    /// The cardinal neighbours in search order:
    /// `(row+1, col)`, `(row, col+1)`, `(row-1, col)`, `(row, col-1)`.
    ///
    /// Search tie-breaking depends on this order. Neighbours that would
    /// overflow a coordinate are skipped.
    #[inline]
    pub fn neighbors_4(self) -> impl Iterator<Item = Cell> {
        [(1, 0), (0, 1), (-1, 0), (0, -1)]
            .into_iter()
            .filter_map(move |(dr, dc)| self.shift(dr, dc))
    }

    /// Whether `other` is exactly one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        u64::from(self.row.abs_diff(other.row)) + u64::from(self.col.abs_diff(other.col)) == 1
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}
