//! Game session: drag lifecycle, turns and captures
//!
//! `Game::frame` runs once per rendered frame with that frame's pointer
//! sample. Only the side to move is hit-tested, and only one piece can be
//! held at a time. A drop is checked in this order: legality, no-op,
//! same-side collision, capture, quiet move. Only the last two commit
//! and pass the turn.

use crate::config::{BoardConfig, DropTrigger};
use crate::geometry::{BoardGeometry, Cell};
use crate::grid::{Grid, Occupant};
use crate::legality;
use crate::piece::{Piece, PieceFactory, PieceId, Side};
use egui::Pos2;

/// Pointer state sampled once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    /// Board-local pointer position.
    pub pos: Pos2,
    /// The primary button went down this frame.
    pub pressed: bool,
    /// The primary button went up this frame.
    pub released: bool,
}

impl PointerInput {
    pub fn hover(pos: Pos2) -> Self {
        Self { pos, pressed: false, released: false }
    }

    pub fn press(pos: Pos2) -> Self {
        Self { pos, pressed: true, released: false }
    }

    pub fn release(pos: Pos2) -> Self {
        Self { pos, pressed: false, released: true }
    }
}

/// Something that happened to a piece during a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameEvent {
    PickedUp { piece: PieceId, from: Cell },
    /// Committed move to an empty cell.
    Moved { piece: PieceId, from: Cell, to: Cell },
    /// Committed move onto an opposing piece, which was removed.
    Captured { piece: PieceId, from: Cell, to: Cell, captured: PieceId },
    /// Dropped back on its own cell.
    NoOp { piece: PieceId },
    /// Dropped on a piece of the same side; reverted.
    Blocked { piece: PieceId, to: Cell },
    /// The piece cannot move there; reverted.
    Illegal { piece: PieceId, from: Cell, to: Cell },
}

impl FrameEvent {
    /// Whether the event changed the board and passed the turn.
    pub fn committed(&self) -> bool {
        matches!(self, FrameEvent::Moved { .. } | FrameEvent::Captured { .. })
    }
}

/// Keyboard-driven session commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Restore both starting sets and give white the move.
    Reset,
    /// Remove every piece of the side to move, conceding the game.
    ClearCurrentSide,
    /// Produce the occupancy grid as text.
    DumpGrid,
}

/// The piece currently held, and where it was picked up from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drag {
    pub piece: PieceId,
    pub side: Side,
    pub origin: Pos2,
}

pub struct Game {
    geometry: BoardGeometry,
    pickup_radius: f32,
    drop_trigger: DropTrigger,
    epsilon: f32,
    grid: Grid,
    /// Indexed by `Side::index`.
    pieces: [Vec<Piece>; 2],
    starters: [Vec<Piece>; 2],
    turn: Side,
    drag: Option<Drag>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(&BoardConfig::default())
    }
}

impl Game {
    pub fn new(config: &BoardConfig) -> Self {
        let config = config.clone().validated();
        let geometry = config.geometry();
        let mut factory = PieceFactory::new();
        let white = factory.starting_set(Side::White, &geometry);
        let black = factory.starting_set(Side::Black, &geometry);
        Self {
            geometry,
            pickup_radius: config.pickup_radius,
            drop_trigger: config.drop_trigger,
            epsilon: config.epsilon,
            grid: Grid::new(),
            pieces: [white.clone(), black.clone()],
            starters: [white, black],
            turn: Side::White,
            drag: None,
        }
    }

    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn pieces(&self, side: Side) -> &[Piece] {
        &self.pieces[side.index()]
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().flatten().find(|p| p.id == id)
    }

    pub fn dragging(&self) -> Option<&Drag> {
        self.drag.as_ref()
    }

    /// The side whose opponent has no pieces left, if any.
    pub fn winner(&self) -> Option<Side> {
        [Side::White, Side::Black]
            .into_iter()
            .find(|side| self.pieces(side.opposite()).is_empty())
    }

    /// Advance the drag state machine by one frame.
    pub fn frame(&mut self, input: PointerInput) -> Option<FrameEvent> {
        match self.drag {
            Some(drag) if self.drop_fires(&input) => self.drop(drag, input.pos),
            Some(drag) => {
                self.follow(drag, input.pos);
                None
            }
            None if input.pressed => self.pick_up(input.pos),
            None => None,
        }
    }

    pub fn apply(&mut self, command: Command) -> Option<String> {
        match command {
            Command::Reset => {
                self.reset();
                None
            }
            Command::ClearCurrentSide => {
                self.clear_current_side();
                None
            }
            Command::DumpGrid => Some(self.grid.dump()),
        }
    }

    pub fn reset(&mut self) {
        self.pieces = self.starters.clone();
        self.grid.reset();
        self.turn = Side::White;
        self.drag = None;
        log::info!("board reset");
    }

    pub fn clear_current_side(&mut self) {
        let side = self.turn;
        let held = self.drag.filter(|d| d.side == side);
        if held.is_some() {
            self.drag = None;
        }
        for piece in self.pieces[side.index()].drain(..) {
            let pos = match held {
                Some(d) if d.piece == piece.id => d.origin,
                _ => piece.pos,
            };
            self.grid.set(self.geometry.pixel_to_cell(pos), Occupant::Empty);
        }
        log::info!("{} pieces cleared, {}", side.name(), side.opposite().victory_banner());
    }

    /// Whether the grid agrees with the piece collections. A held piece
    /// counts as still standing on the cell it was picked up from.
    pub fn is_consistent(&self) -> bool {
        let mut expected = Grid::empty();
        for piece in self.pieces.iter().flatten() {
            let pos = match self.drag {
                Some(d) if d.piece == piece.id => d.origin,
                _ => piece.pos,
            };
            let cell = self.geometry.pixel_to_cell(pos);
            if !expected.get(cell).is_empty() {
                return false;
            }
            expected.set(cell, piece.side.into());
        }
        expected == self.grid
    }

    fn drop_fires(&self, input: &PointerInput) -> bool {
        match self.drop_trigger {
            DropTrigger::SecondPress => input.pressed,
            DropTrigger::Release => input.released,
        }
    }

    fn index_of(&self, side: Side, id: PieceId) -> Option<usize> {
        self.pieces[side.index()].iter().position(|p| p.id == id)
    }

    fn pick_up(&mut self, pointer: Pos2) -> Option<FrameEvent> {
        let side = self.turn;
        let radius = self.pickup_radius;
        let piece = self.pieces[side.index()]
            .iter_mut()
            .find(|p| p.pos.distance(pointer) <= radius)?;
        piece.dragging = true;
        self.drag = Some(Drag { piece: piece.id, side, origin: piece.pos });
        let from = self.geometry.pixel_to_cell(piece.pos);
        log::debug!("{} picked up {:?} {} at {}", side.name(), piece.kind, piece.id, from);
        Some(FrameEvent::PickedUp { piece: piece.id, from })
    }

    fn follow(&mut self, drag: Drag, pointer: Pos2) {
        if let Some(i) = self.index_of(drag.side, drag.piece) {
            self.pieces[drag.side.index()][i].pos = pointer;
        }
    }

    fn drop(&mut self, drag: Drag, pointer: Pos2) -> Option<FrameEvent> {
        self.drag = None;
        let side = drag.side;
        let i = self.index_of(side, drag.piece)?;
        let mut piece = self.pieces[side.index()][i];
        piece.dragging = false;

        let from = self.geometry.pixel_to_cell(drag.origin);
        let to = self.geometry.pixel_to_cell(pointer);
        let dest = self.geometry.cell_to_pixel(to);

        let event = if !legality::is_legal(&self.geometry, &self.grid, &piece, drag.origin, pointer) {
            piece.pos = drag.origin;
            FrameEvent::Illegal { piece: piece.id, from, to }
        } else if from == to {
            piece.pos = drag.origin;
            FrameEvent::NoOp { piece: piece.id }
        } else if self.pieces[side.index()]
            .iter()
            .any(|p| p.id != piece.id && self.same_spot(p.pos, dest))
        {
            piece.pos = drag.origin;
            FrameEvent::Blocked { piece: piece.id, to }
        } else {
            piece.pos = dest;
            self.grid.set(from, Occupant::Empty);
            self.grid.set(to, side.into());
            self.turn = self.turn.opposite();
            match self.take_piece_at(side.opposite(), dest) {
                Some(captured) => FrameEvent::Captured { piece: piece.id, from, to, captured },
                None => FrameEvent::Moved { piece: piece.id, from, to },
            }
        };

        self.pieces[side.index()][i] = piece;
        self.log_drop(&piece, &event);
        Some(event)
    }

    fn same_spot(&self, a: Pos2, b: Pos2) -> bool {
        (a.x - b.x).abs() < self.epsilon && (a.y - b.y).abs() < self.epsilon
    }

    /// Remove the first piece of `side` standing at `pos`.
    fn take_piece_at(&mut self, side: Side, pos: Pos2) -> Option<PieceId> {
        let eps = self.epsilon;
        let pieces = &mut self.pieces[side.index()];
        let i = pieces
            .iter()
            .position(|p| (p.pos.x - pos.x).abs() < eps && (p.pos.y - pos.y).abs() < eps)?;
        Some(pieces.remove(i).id)
    }

    fn log_drop(&self, piece: &Piece, event: &FrameEvent) {
        match event {
            FrameEvent::Captured { to, captured, .. } => {
                log::info!("{} {:?} {} captured {} at {}", piece.side.name(), piece.kind, piece.id, captured, to);
                if let Some(winner) = self.winner() {
                    log::info!("{}", winner.victory_banner());
                }
            }
            FrameEvent::Moved { from, to, .. } => {
                log::debug!("{} {:?} {} moved {} -> {}", piece.side.name(), piece.kind, piece.id, from, to);
            }
            other => log::debug!("{} {:?} {}: {:?}", piece.side.name(), piece.kind, piece.id, other),
        }
    }
}
