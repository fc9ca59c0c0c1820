//! Board geometry: pixel positions <-> board cells
//!
//! Positions are board-local pixels with (0, 0) at the top-left corner of
//! the board. Column grows to the right, row grows downward.

use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

pub const BOARD_CELLS: u8 = 8;

/// One of the 64 board positions. Both coordinates are in `0..8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: u8,
    pub row: u8,
}

impl Cell {
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// Every cell, row by row from the top-left.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_CELLS).flat_map(|row| (0..BOARD_CELLS).map(move |col| Cell::new(col, row)))
    }

    /// Absolute (column, row) distance to `other`.
    pub fn distance(self, other: Cell) -> (u8, u8) {
        (self.col.abs_diff(other.col), self.row.abs_diff(other.row))
    }

    /// Signed (column, row) offset from `self` to `other`.
    pub fn offset_to(self, other: Cell) -> (i8, i8) {
        (
            other.col as i8 - self.col as i8,
            other.row as i8 - self.row as i8,
        )
    }

    /// Step by a signed offset, or `None` when that leaves the board.
    pub fn offset(self, dc: i8, dr: i8) -> Option<Cell> {
        let col = self.col as i8 + dc;
        let row = self.row as i8 + dr;
        let range = 0..BOARD_CELLS as i8;
        (range.contains(&col) && range.contains(&row)).then(|| Cell::new(col as u8, row as u8))
    }

    pub fn is_dark(self) -> bool {
        (self.col + self.row) % 2 == 1
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Pixel layout of the board.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardGeometry {
    /// Side length of the whole board in pixels.
    pub size: f32,
    /// Offset subtracted from each cell's far edge to get the snap reference
    /// point for that cell. Must lie strictly between 0 and the cell size.
    pub snap_offset: f32,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self { size: 700.0, snap_offset: 40.0 }
    }
}

impl BoardGeometry {
    pub fn cell_size(&self) -> f32 {
        self.size / BOARD_CELLS as f32
    }

    /// Nearest cell for a pixel position. Each axis snaps independently to
    /// the index whose reference point `i * cell - snap_offset` (i in 1..=8)
    /// is closest; the first closest index wins a tie. Points off the board
    /// snap to the nearest edge cell.
    pub fn pixel_to_cell(&self, p: Pos2) -> Cell {
        Cell::new(self.snap_axis(p.x), self.snap_axis(p.y))
    }

    fn snap_axis(&self, v: f32) -> u8 {
        let cell = self.cell_size();
        let mut best = 0;
        let mut best_dist = f32::INFINITY;
        for i in 1..=BOARD_CELLS {
            let reference = i as f32 * cell - self.snap_offset;
            let dist = (v - reference).abs();
            if dist < best_dist {
                best_dist = dist;
                best = i - 1;
            }
        }
        best
    }

    /// Center of a cell in pixels.
    pub fn cell_to_pixel(&self, cell: Cell) -> Pos2 {
        let s = self.cell_size();
        Pos2::new(cell.col as f32 * s + s / 2.0, cell.row as f32 * s + s / 2.0)
    }

    /// Center of the cell nearest to `p`.
    pub fn snap(&self, p: Pos2) -> Pos2 {
        self.cell_to_pixel(self.pixel_to_cell(p))
    }

    pub fn cell_rect(&self, cell: Cell) -> Rect {
        let s = self.cell_size();
        Rect::from_min_size(
            Pos2::new(cell.col as f32 * s, cell.row as f32 * s),
            Vec2::splat(s),
        )
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::splat(self.size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_every_cell() {
        let g = BoardGeometry::default();
        for cell in Cell::all() {
            assert_eq!(g.pixel_to_cell(g.cell_to_pixel(cell)), cell, "cell {}", cell);
        }
        assert_eq!(Cell::all().count(), 64);
    }

    #[test]
    fn test_cell_centers() {
        let g = BoardGeometry::default();
        assert_eq!(g.cell_size(), 87.5);
        assert_eq!(g.cell_to_pixel(Cell::new(0, 0)), Pos2::new(43.75, 43.75));
        assert_eq!(g.cell_to_pixel(Cell::new(7, 2)), Pos2::new(656.25, 218.75));
    }

    #[test]
    fn test_off_board_snaps_to_edge() {
        let g = BoardGeometry::default();
        assert_eq!(g.pixel_to_cell(Pos2::new(-500.0, -1.0)), Cell::new(0, 0));
        assert_eq!(g.pixel_to_cell(Pos2::new(5000.0, 701.0)), Cell::new(7, 7));
        assert_eq!(g.pixel_to_cell(Pos2::new(-20.0, 9000.0)), Cell::new(0, 7));
    }

    #[test]
    fn test_snap_boundary_is_shifted() {
        // Reference points sit 3.75 px right of the cell centers, so the
        // switch from column 0 to 1 happens at 91.25 rather than 87.5.
        let g = BoardGeometry::default();
        assert_eq!(g.pixel_to_cell(Pos2::new(90.0, 0.0)).col, 0);
        assert_eq!(g.pixel_to_cell(Pos2::new(92.0, 0.0)).col, 1);
    }

    #[test]
    fn test_piece_generator_offsets_snap_to_columns() {
        // The starting layout places pieces at x = i * cell and snaps them.
        let g = BoardGeometry::default();
        for i in 1..=8u8 {
            let x = i as f32 * g.cell_size();
            assert_eq!(g.pixel_to_cell(Pos2::new(x, 0.0)).col, i - 1);
        }
    }

    #[test]
    fn test_cell_offsets() {
        let c = Cell::new(3, 4);
        assert_eq!(c.distance(Cell::new(1, 7)), (2, 3));
        assert_eq!(c.offset_to(Cell::new(1, 7)), (-2, 3));
        assert_eq!(c.offset(1, -1), Some(Cell::new(4, 3)));
        assert_eq!(Cell::new(0, 0).offset(-1, 0), None);
        assert_eq!(Cell::new(7, 7).offset(0, 1), None);
    }
}
