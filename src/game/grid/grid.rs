//! Board grid storage.
//!
//! The board is a flat row-major vector of cells indexed by `y * size + x`.
//! Coordinates are signed so that candidate moves off the edge can be
//! expressed and rejected by [`Board::contains`].

use crate::config::game::GRID_SIZE;
use crate::game::types::{Cell, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// An empty board with no obstacles or gems.
    pub fn empty() -> Self {
        Self {
            size: GRID_SIZE,
            cells: vec![Cell::Empty; GRID_SIZE * GRID_SIZE],
        }
    }

    /// A board with features at fixed positions. Out-of-bounds positions are ignored,
    /// and a gem never replaces an obstacle listed at the same position.
    #[cfg(test)]
    pub fn with_features(obstacles: &[Position], gems: &[Position]) -> Self {
        let mut board = Self::empty();
        for &pos in obstacles {
            board.set(pos, Cell::Obstacle);
        }
        for &pos in gems {
            if board.cell(pos).is_some_and(Cell::is_empty) {
                board.set(pos, Cell::Gem);
            }
        }
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Cell at `pos`, or `None` when off the board.
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Overwrite the cell at `pos`. Returns false when off the board.
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Row-major iteration over rows of cells.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    fn index(&self, pos: Position) -> Option<usize> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        (x < self.size && y < self.size).then(|| y * self.size + x)
    }
}
