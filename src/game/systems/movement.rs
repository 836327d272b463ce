//! Player movement system.
//!
//! This module validates and applies single-step moves on the board.

use crate::game::entities::Player;
use crate::game::grid::Board;
use crate::game::types::{Cell, Direction, Position};

/// True iff the step stays on the board and does not land on an obstacle.
/// Another player's cell is a legal destination.
pub fn is_valid_move(board: &Board, player: &Player, direction: Direction) -> bool {
    let target = player.pos.moved(direction);
    board.contains(target) && board.cell(target) != Some(Cell::Obstacle)
}

/// Validate then apply a move. Returns the new position, or `None` when rejected.
pub fn move_player(board: &Board, player: &mut Player, direction: Direction) -> Option<Position> {
    if !is_valid_move(board, player, direction) {
        return None;
    }
    player.apply_move(direction);
    Some(player.pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_are_rejected() {
        let board = Board::empty();
        let corner = Player::new("P1", Position::new(0, 0));
        assert!(!is_valid_move(&board, &corner, Direction::Up));
        assert!(!is_valid_move(&board, &corner, Direction::Left));
        assert!(is_valid_move(&board, &corner, Direction::Down));
        assert!(is_valid_move(&board, &corner, Direction::Right));

        let far = Player::new("P2", Position::new(5, 5));
        assert!(!is_valid_move(&board, &far, Direction::Down));
        assert!(!is_valid_move(&board, &far, Direction::Right));
        assert!(is_valid_move(&board, &far, Direction::Up));
        assert!(is_valid_move(&board, &far, Direction::Left));
    }

    #[test]
    fn test_move_into_obstacle() {
        let board = Board::with_features(&[Position::new(3, 2)], &[]);
        let mut player = Player::new("P1", Position::new(2, 2));

        assert_eq!(move_player(&board, &mut player, Direction::Right), None);
        assert_eq!(player.pos, Position::new(2, 2));
    }

    #[test]
    fn test_move_onto_gem_is_allowed() {
        let board = Board::with_features(&[], &[Position::new(2, 3)]);
        let mut player = Player::new("P1", Position::new(2, 2));

        assert_eq!(move_player(&board, &mut player, Direction::Down), Some(Position::new(2, 3)));
    }

    #[test]
    fn test_validation_does_not_move_player() {
        let board = Board::empty();
        let player = Player::new("P1", Position::new(1, 1));
        assert!(is_valid_move(&board, &player, Direction::Up));
        assert_eq!(player.pos, Position::new(1, 1));
    }
}
