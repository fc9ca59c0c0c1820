//! Move legality: reachability plus obstruction
//!
//! Board colours are not consulted here. A move onto a cell held by the
//! mover's own side passes, and the game rejects it afterwards.

use crate::geometry::{BoardGeometry, Cell};
use crate::grid::Grid;
use crate::movement;
use crate::path;
use crate::piece::{Piece, PieceKind};
use egui::Pos2;

pub fn is_legal_move(grid: &Grid, kind: PieceKind, from: Cell, to: Cell) -> bool {
    if from == to {
        return true;
    }
    movement::reaches(kind, from, to) && (!kind.slides() || path::is_path_clear(grid, from, to))
}

/// Legality of dragging `piece` from the pixel `origin` to the pixel `dest`.
pub fn is_legal(geometry: &BoardGeometry, grid: &Grid, piece: &Piece, origin: Pos2, dest: Pos2) -> bool {
    let from = geometry.pixel_to_cell(origin);
    let to = geometry.pixel_to_cell(dest);
    is_legal_move(grid, piece.kind, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Occupant;
    use crate::piece::{PieceFactory, Side};

    fn c(col: u8, row: u8) -> Cell {
        Cell::new(col, row)
    }

    #[test]
    fn test_rook_column_blocked_and_open() {
        let mut grid = Grid::empty();
        assert!(is_legal_move(&grid, PieceKind::Rook, c(0, 0), c(0, 7)));
        grid.set(c(0, 3), Occupant::White);
        assert!(!is_legal_move(&grid, PieceKind::Rook, c(0, 0), c(0, 7)));
    }

    #[test]
    fn test_queen_blocked_on_diagonal() {
        let mut grid = Grid::empty();
        grid.set(c(5, 2), Occupant::Black);
        assert!(!is_legal_move(&grid, PieceKind::Queen, c(3, 4), c(6, 1)));
        assert!(is_legal_move(&grid, PieceKind::Queen, c(3, 4), c(5, 2)));
        assert!(is_legal_move(&grid, PieceKind::Queen, c(3, 4), c(0, 7)));
    }

    #[test]
    fn test_jumpers_ignore_obstruction() {
        let grid = Grid::new();
        assert!(is_legal_move(&grid, PieceKind::Knight, c(1, 0), c(2, 2)));
        assert!(is_legal_move(&grid, PieceKind::Pawn, c(0, 1), c(3, 4)));
        assert!(is_legal_move(&grid, PieceKind::King, c(3, 0), c(3, 1)));
    }

    #[test]
    fn test_own_side_target_passes() {
        let grid = Grid::new();
        // (0, 1) holds a white pawn; the rook path is only the endpoints.
        assert!(is_legal_move(&grid, PieceKind::Rook, c(0, 0), c(0, 1)));
    }

    #[test]
    fn test_from_pixels() {
        let g = BoardGeometry::default();
        let grid = Grid::new();
        let mut f = PieceFactory::new();
        let knight = f.make(Side::White, PieceKind::Knight, g.cell_to_pixel(c(1, 0)));
        let origin = knight.pos;
        assert!(is_legal(&g, &grid, &knight, origin, Pos2::new(220.0, 230.0)));
        assert!(!is_legal(&g, &grid, &knight, origin, g.cell_to_pixel(c(3, 3))));
    }
}
