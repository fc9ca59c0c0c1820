//! Pieces, sides, and the starting layout

use crate::geometry::{BoardGeometry, Cell, BOARD_CELLS};
use egui::Pos2;
use serde::{Deserialize, Serialize};

/// One of the two players. White is side 0 and moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opposite(&self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Side::White => "white",
            Side::Black => "black",
        }
    }

    pub fn victory_banner(&self) -> &'static str {
        match self {
            Side::White => "White wins!",
            Side::Black => "Black wins!",
        }
    }

    fn back_row(&self) -> u8 {
        match self {
            Side::White => 0,
            Side::Black => BOARD_CELLS - 1,
        }
    }

    fn pawn_row(&self) -> u8 {
        match self {
            Side::White => 1,
            Side::Black => BOARD_CELLS - 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Rook, bishop and queen are blocked by pieces in their path.
    pub fn slides(&self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen)
    }

    pub fn symbol(&self, side: Side) -> &'static str {
        match (side, self) {
            (Side::White, PieceKind::King) => "♔",
            (Side::White, PieceKind::Queen) => "♕",
            (Side::White, PieceKind::Rook) => "♖",
            (Side::White, PieceKind::Bishop) => "♗",
            (Side::White, PieceKind::Knight) => "♘",
            (Side::White, PieceKind::Pawn) => "♙",
            (Side::Black, PieceKind::King) => "♚",
            (Side::Black, PieceKind::Queen) => "♛",
            (Side::Black, PieceKind::Rook) => "♜",
            (Side::Black, PieceKind::Bishop) => "♝",
            (Side::Black, PieceKind::Knight) => "♞",
            (Side::Black, PieceKind::Pawn) => "♟",
        }
    }
}

/// Stable identity of a piece. Two pieces are the same piece iff their
/// ids match, whatever their other fields say.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Piece {
    pub id: PieceId,
    pub side: Side,
    pub kind: PieceKind,
    /// Rendered position in board pixels. A cell center unless dragging.
    pub pos: Pos2,
    pub dragging: bool,
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Piece {}

/// Hands out piece ids in increasing order.
#[derive(Debug, Default)]
pub struct PieceFactory {
    next: u32,
}

impl PieceFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn make(&mut self, side: Side, kind: PieceKind, pos: Pos2) -> Piece {
        let id = PieceId(self.next);
        self.next += 1;
        Piece { id, side, kind, pos, dragging: false }
    }

    /// A full 16-piece set for one side, each piece centered on its cell.
    ///
    /// Order: eight pawns left to right, then rook, knight and bishop pairs
    /// (outer piece first), then king and queen.
    pub fn starting_set(&mut self, side: Side, geometry: &BoardGeometry) -> Vec<Piece> {
        let mut set = Vec::with_capacity(16);
        let mut place = |factory: &mut Self, kind: PieceKind, col: u8| {
            let row = if kind == PieceKind::Pawn { side.pawn_row() } else { side.back_row() };
            let pos = geometry.cell_to_pixel(Cell::new(col, row));
            set.push(factory.make(side, kind, pos));
        };

        for col in 0..BOARD_CELLS {
            place(self, PieceKind::Pawn, col);
        }
        for (i, kind) in [PieceKind::Rook, PieceKind::Knight, PieceKind::Bishop].into_iter().enumerate() {
            let col = i as u8;
            place(self, kind, col);
            place(self, kind, BOARD_CELLS - 1 - col);
        }
        place(self, PieceKind::King, 3);
        place(self, PieceKind::Queen, 4);

        set
    }
}
