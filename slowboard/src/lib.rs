//! slowBoard — a two-player drag-and-drop chess board
//!
//! The engine is deliberately loose: pieces move by shape only, sliders
//! are blocked by pieces in their way, and pawns may go anywhere. There is
//! no check, castling or promotion. A side loses when it has no pieces.

pub mod config;
pub mod game;
pub mod geometry;
pub mod grid;
pub mod legality;
pub mod movement;
pub mod path;
pub mod piece;

pub use config::{BoardConfig, DropTrigger};
pub use game::{Command, FrameEvent, Game, PointerInput};
pub use geometry::{BoardGeometry, Cell};
pub use piece::{Piece, PieceId, PieceKind, Side};
