//! Obstacle and gem placement.
//!
//! Features are scattered by sampling random cells until an empty one turns
//! up. The sampling is bounded: a pass that cannot fit its features fails
//! with [`GameError::PlacementExhausted`] instead of spinning forever.

use std::ops::RangeInclusive;

use log::{debug, warn};
use rand::Rng;

use crate::config::game::MAX_PLACEMENT_ATTEMPTS;
use crate::game::error::{GameError, GameResult};
use crate::game::grid::Board;
use crate::game::types::{Cell, Position};

/// Draw a count from `range` and scatter that many `feature` cells on empty cells.
/// Returns the number placed.
pub fn scatter_features<R: Rng + ?Sized>(
    board: &mut Board,
    feature: Cell,
    range: RangeInclusive<usize>,
    rng: &mut R,
) -> GameResult<usize> {
    let count = rng.random_range(range);
    place_features(board, feature, count, rng)?;
    Ok(count)
}

/// Place exactly `count` `feature` cells on distinct empty cells.
pub fn place_features<R: Rng + ?Sized>(
    board: &mut Board,
    feature: Cell,
    count: usize,
    rng: &mut R,
) -> GameResult<()> {
    let free = board.count(Cell::Empty);
    if count > free {
        warn!("[Board] {:?} pass wants {} cells, only {} free", feature, count, free);
        return Err(GameError::PlacementExhausted { feature, requested: count, free });
    }

    let size = board.size() as i32;
    for placed in 0..count {
        let mut attempts = 0;
        loop {
            if attempts == MAX_PLACEMENT_ATTEMPTS {
                warn!(
                    "[Board] Gave up placing {:?} after {} attempts ({} of {} placed)",
                    feature, attempts, placed, count
                );
                return Err(GameError::PlacementExhausted {
                    feature,
                    requested: count - placed,
                    free: board.count(Cell::Empty),
                });
            }
            attempts += 1;

            let pos = Position::new(rng.random_range(0..size), rng.random_range(0..size));
            if board.cell(pos).is_some_and(Cell::is_empty) {
                board.set(pos, feature);
                debug!("[Board] {:?} placed at ({}, {})", feature, pos.x, pos.y);
                break;
            }
        }
    }
    Ok(())
}
