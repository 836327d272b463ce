use log::debug;

use crate::game::entities::Player;
use crate::game::grid::Board;
use crate::game::types::Cell;

/// Pick up the gem under the player, if any. Returns true when a gem was collected.
pub fn collect_gem(board: &mut Board, player: &mut Player) -> bool {
    if board.cell(player.pos) != Some(Cell::Gem) {
        return false;
    }
    board.set(player.pos, Cell::Empty);
    player.award_gem();
    debug!(
        "[Game] {} collected a gem at ({}, {}), total {}",
        player.name(), player.pos.x, player.pos.y, player.gem_count()
    );
    true
}
