/// Game configuration constants.
///
/// This module defines the fixed gameplay parameters: board dimensions,
/// game length, feature counts and starting corners.
use std::ops::RangeInclusive;

/// Width and height of the square board.
pub const GRID_SIZE: usize = 6;

/// Number of completed moves after which the game ends.
pub const MAX_TURNS: u32 = 30;

/// Inclusive range the obstacle count is drawn from at setup.
pub const OBSTACLE_COUNT: RangeInclusive<usize> = 5..=10;

/// Inclusive range the gem count is drawn from at setup.
pub const GEM_COUNT: RangeInclusive<usize> = 5..=10;

/// Random cell samples allowed per placed feature before setup gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;

/// Display names of player 1 and player 2.
pub const PLAYER_NAMES: [&str; 2] = ["P1", "P2"];

/// Starting (x, y) corners of player 1 and player 2.
pub const PLAYER_STARTS: [(i32, i32); 2] = [(0, 0), (5, 5)];
