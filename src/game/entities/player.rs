//! Player entity.

use serde::{Serialize, Deserialize};

use crate::config::game::{PLAYER_NAMES, PLAYER_STARTS};
use crate::game::types::{Direction, Position};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    pub pos: Position,
    gem_count: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, pos: Position) -> Self {
        Self {
            name: name.into(),
            pos,
            gem_count: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gem_count(&self) -> u32 {
        self.gem_count
    }

    /// Step one cell in `direction`. The caller validates the move first.
    pub fn apply_move(&mut self, direction: Direction) {
        self.pos.step(direction);
    }

    /// Only the board's collection step awards gems.
    pub(in crate::game) fn award_gem(&mut self) {
        self.gem_count += 1;
    }
}

/// Spawn both players on their fixed starting corners.
pub fn spawn_players() -> [Player; 2] {
    [0, 1].map(|i| {
        let (x, y) = PLAYER_STARTS[i];
        Player::new(PLAYER_NAMES[i], Position::new(x, y))
    })
}
