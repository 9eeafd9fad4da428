//! The [`Path`] type returned by searches and routes.

use std::ops::Index;

use rackpath_core::Cell;

/// A non-empty sequence of cells where each consecutive pair is one cardinal
/// step apart. The first cell is the start and the last is the goal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Path(Vec<Cell>);

impl Path {
    /// A path that stays on `cell`.
    pub(crate) fn single(cell: Cell) -> Self {
        Self(vec![cell])
    }

    pub(crate) fn from_cells(cells: Vec<Cell>) -> Self {
        debug_assert!(!cells.is_empty());
        Self(cells)
    }

    /// Append a leg that starts where this path ends, without repeating the
    /// shared cell.
    pub(crate) fn extend_leg(&mut self, leg: Path) {
        debug_assert_eq!(Some(self.goal()), leg.0.first().copied());
        self.0.extend(leg.0.into_iter().skip(1));
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.0[0]
    }

    #[inline]
    pub fn goal(&self) -> Cell {
        self.0[self.0.len() - 1]
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of moves (`len() - 1`).
    #[inline]
    pub fn steps(&self) -> usize {
        self.0.len() - 1
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.0.contains(&cell)
    }

    /// Whether every consecutive pair is exactly one cardinal step apart.
    pub fn is_contiguous(&self) -> bool {
        self.0.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.0.iter()
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.0
    }
}

impl Index<usize> for Path {
    type Output = Cell;
    fn index(&self, i: usize) -> &Cell {
        &self.0[i]
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Path> for Vec<Cell> {
    fn from(p: Path) -> Self {
        p.0
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serializes_as_cell_list() {
        let p = Path::from_cells(vec![Cell::new(0, 0), Cell::new(1, 0)]);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"[{"row":0,"col":0},{"row":1,"col":0}]"#);
    }
}
