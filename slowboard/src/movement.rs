//! Movement predicates
//!
//! Pure geometry: can a piece of a given kind get from one cell to another
//! on an empty board. Direction never matters, only the per-axis distance,
//! so a rook can go up as well as down and a pawn may go anywhere.

use crate::geometry::{Cell, BOARD_CELLS};
use crate::piece::PieceKind;

/// Same row within `n` columns, or same column within `n` rows.
pub fn straight_within(a: Cell, b: Cell, n: u8) -> bool {
    let (dc, dr) = a.distance(b);
    (dr == 0 && dc <= n) || (dc == 0 && dr <= n)
}

/// On a shared diagonal, at most `n` steps apart.
pub fn diagonal_within(a: Cell, b: Cell, n: u8) -> bool {
    let (dc, dr) = a.distance(b);
    dc == dr && dc <= n
}

pub fn knight_jump(a: Cell, b: Cell) -> bool {
    matches!(a.distance(b), (1, 2) | (2, 1))
}

/// Whether `kind` can reach `to` from `from`, ignoring other pieces.
/// Dropping a piece back on its own cell always counts as reachable.
pub fn reaches(kind: PieceKind, from: Cell, to: Cell) -> bool {
    if from == to {
        return true;
    }
    let far = BOARD_CELLS;
    match kind {
        // No direction, distance or capture rules for pawns.
        PieceKind::Pawn => true,
        PieceKind::King => straight_within(from, to, 1) || diagonal_within(from, to, 1),
        PieceKind::Rook => straight_within(from, to, far),
        PieceKind::Bishop => diagonal_within(from, to, far),
        PieceKind::Queen => straight_within(from, to, far) || diagonal_within(from, to, far),
        PieceKind::Knight => knight_jump(from, to),
    }
}
