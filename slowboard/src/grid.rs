//! Occupancy grid: which side, if any, holds each cell

use crate::geometry::{Cell, BOARD_CELLS};
use crate::piece::Side;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Occupant {
    White,
    Black,
    Empty,
}

impl Occupant {
    /// Digit used in the diagnostic dump: side index, or 2 for empty.
    pub fn code(&self) -> u8 {
        match self {
            Occupant::White => 0,
            Occupant::Black => 1,
            Occupant::Empty => 2,
        }
    }

    pub fn side(&self) -> Option<Side> {
        match self {
            Occupant::White => Some(Side::White),
            Occupant::Black => Some(Side::Black),
            Occupant::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Occupant::Empty
    }
}

impl From<Side> for Occupant {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Occupant::White,
            Side::Black => Occupant::Black,
        }
    }
}

/// Fixed 8x8 grid, indexed `[col][row]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: [[Occupant; BOARD_CELLS as usize]; BOARD_CELLS as usize],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// A grid in the starting layout.
    pub fn new() -> Self {
        let mut grid = Self::empty();
        grid.reset();
        grid
    }

    pub fn empty() -> Self {
        Self { cells: [[Occupant::Empty; BOARD_CELLS as usize]; BOARD_CELLS as usize] }
    }

    /// Rows 0-1 white, rows 6-7 black, everything else empty.
    pub fn reset(&mut self) {
        for cell in Cell::all() {
            let occupant = match cell.row {
                0 | 1 => Occupant::White,
                6 | 7 => Occupant::Black,
                _ => Occupant::Empty,
            };
            self.set(cell, occupant);
        }
    }

    pub fn get(&self, cell: Cell) -> Occupant {
        self.cells[cell.col as usize][cell.row as usize]
    }

    pub fn set(&mut self, cell: Cell, occupant: Occupant) {
        self.cells[cell.col as usize][cell.row as usize] = occupant;
    }

    pub fn count(&self, occupant: Occupant) -> usize {
        Cell::all().filter(|&c| self.get(c) == occupant).count()
    }

    /// Diagnostic text: a separator line, then one line per row of codes.
    pub fn dump(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-----------------------------")?;
        for row in 0..BOARD_CELLS {
            for col in 0..BOARD_CELLS {
                write!(f, "{} ", self.get(Cell::new(col, row)).code())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
