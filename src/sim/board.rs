//! Derived board rasterization
//!
//! The board is a projection of the entity positions onto a grid of
//! cell markers, rebuilt from an empty grid every step. It is what the
//! painter consumes; the simulation never reads it back, so it carries
//! no state of its own.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::state::{Cell, Position};
use crate::consts::{GRID_SIZE, SHIP_ROW};

const SIZE: usize = GRID_SIZE as usize;

/// The rasterized play field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// An all-empty grid
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Project the entities onto a fresh grid
    ///
    /// Paint order matches the classic renderer: ship, invaders, then
    /// both shot queues, so a shot passing through an occupied cell
    /// shows as a shot for that frame.
    pub fn rasterize(
        ship_col: i32,
        invaders: &[Position],
        incoming: &[Position],
        outgoing: &[Position],
    ) -> Self {
        let mut board = Self::empty();
        board.set(Position::new(SHIP_ROW, ship_col), Cell::Ship);
        for p in invaders {
            board.set(*p, Cell::Invader);
        }
        for p in incoming.iter().chain(outgoing) {
            board.set(*p, Cell::Shot);
        }
        board
    }

    /// Marker at `(row, col)`; off-board reads answer `Empty`
    pub fn cell(&self, row: i32, col: i32) -> Cell {
        if Position::new(row, col).on_board() {
            self.cells[row as usize][col as usize]
        } else {
            Cell::Empty
        }
    }

    /// Row-major cell grid, for painters that want bulk access
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    // Off-board positions are dropped silently; entities leave the
    // grid through the filters in the tick, not through the raster.
    fn set(&mut self, pos: Position, cell: Cell) {
        if pos.on_board() {
            self.cells[pos.row as usize][pos.col as usize] = cell;
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Ship => 'A',
                    Cell::Invader => 'V',
                    Cell::Shot => '|',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rasterize_places_everything() {
        let invaders = vec![Position::new(0, 4)];
        let incoming = vec![Position::new(5, 2)];
        let outgoing = vec![Position::new(7, 9)];
        let board = Board::rasterize(3, &invaders, &incoming, &outgoing);

        assert_eq!(board.cell(SHIP_ROW, 3), Cell::Ship);
        assert_eq!(board.cell(0, 4), Cell::Invader);
        assert_eq!(board.cell(5, 2), Cell::Shot);
        assert_eq!(board.cell(7, 9), Cell::Shot);
        assert_eq!(board.cell(1, 1), Cell::Empty);
    }

    #[test]
    fn test_shots_paint_over_invaders() {
        let invaders = vec![Position::new(4, 4)];
        let incoming = vec![Position::new(4, 4)];
        let board = Board::rasterize(0, &invaders, &incoming, &[]);
        assert_eq!(board.cell(4, 4), Cell::Shot);
    }

    #[test]
    fn test_off_board_entities_are_dropped() {
        let strays = vec![Position::new(-1, 4), Position::new(10, 4)];
        let board = Board::rasterize(0, &strays, &[], &[]);
        assert_eq!(board, Board::rasterize(0, &[], &[], &[]));
        assert_eq!(board.cell(-1, 4), Cell::Empty);
    }

    #[test]
    fn test_display_layout() {
        let board = Board::rasterize(2, &[Position::new(0, 0)], &[], &[]);
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), SIZE);
        assert!(lines[0].starts_with('V'));
        assert_eq!(&lines[SIZE - 1][2..3], "A");
    }
}
