//! Board storage and generation.

pub mod grid;

pub use grid::Board;

use log::info;
use rand::Rng;

use crate::config::game::{GEM_COUNT, OBSTACLE_COUNT};
use crate::game::entities::scatter_features;
use crate::game::error::GameResult;
use crate::game::types::Cell;

/// Generate a fresh board: an obstacle pass, then a gem pass, each on empty cells only.
pub fn generate_board<R: Rng + ?Sized>(rng: &mut R) -> GameResult<Board> {
    let mut board = Board::empty();
    let obstacles = scatter_features(&mut board, Cell::Obstacle, OBSTACLE_COUNT, rng)?;
    let gems = scatter_features(&mut board, Cell::Gem, GEM_COUNT, rng)?;
    info!("[Board] Generated {}x{} board with {} obstacles and {} gems", board.size(), board.size(), obstacles, gems);
    Ok(board)
}
