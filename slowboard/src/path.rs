//! Path obstruction for sliding pieces

use crate::geometry::Cell;
use crate::grid::Grid;

/// Cells strictly between `from` and `to` along a row, column or diagonal.
///
/// Yields nothing when the two cells do not share a line, or are adjacent.
pub fn between(from: Cell, to: Cell) -> impl Iterator<Item = Cell> {
    let (dc, dr) = from.offset_to(to);
    let on_line = dc == 0 || dr == 0 || dc.abs() == dr.abs();
    let steps = if on_line { dc.abs().max(dr.abs()) } else { 0 };
    let (sc, sr) = (dc.signum(), dr.signum());
    (1..steps).filter_map(move |i| from.offset(sc * i, sr * i))
}

/// True when no occupied cell lies strictly between `from` and `to`.
pub fn is_path_clear(grid: &Grid, from: Cell, to: Cell) -> bool {
    between(from, to).all(|cell| grid.get(cell).is_empty())
}
