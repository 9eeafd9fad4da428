use rackpath_core::Cell;

/// Manhattan (L1) distance between two cells.
///
/// Exact step count on an empty 4-connected grid, and a lower bound on it
/// once obstacles are present. Saturates at `i32::MAX` for cells too far
/// apart to represent.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    let d = a.row.abs_diff(b.row).saturating_add(a.col.abs_diff(b.col));
    i32::try_from(d).unwrap_or(i32::MAX)
}
