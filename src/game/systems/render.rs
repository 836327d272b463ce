//! Game rendering system (terminal).
//!
//! This module turns the board and players into the text shown on the console.

use std::io::{self, Write};

use crate::game::entities::Player;
use crate::game::grid::Board;
use crate::game::state::GameOutcome;
use crate::game::types::Position;

/// Render the board row by row, space-separated, one row per line.
/// A player's marker hides the cell under it; player 1 is drawn over player 2.
pub fn render_board(board: &Board, players: &[Player]) -> String {
    let mut out = String::new();
    for (y, row) in board.rows().enumerate() {
        let tokens: Vec<&str> = row.iter().enumerate().map(|(x, cell)| {
            let pos = Position::new(x as i32, y as i32);
            match players.iter().find(|p| p.pos == pos) {
                Some(player) => player.name(),
                None => cell.symbol(),
            }
        }).collect();
        out.push_str(&tokens.join(" "));
        out.push('\n');
    }
    out
}

pub fn print_board<W: Write>(out: &mut W, board: &Board, players: &[Player]) -> io::Result<()> {
    write!(out, "{}", render_board(board, players))
}

/// Print the final gem counts and the winner line.
pub fn print_summary<W: Write>(out: &mut W, players: &[Player; 2], outcome: GameOutcome) -> io::Result<()> {
    writeln!(
        out,
        "Game Over! {} collected {} gems. {} collected {} gems.",
        players[0].name(), players[0].gem_count(), players[1].name(), players[1].gem_count()
    )?;
    match outcome {
        GameOutcome::Winner(i) => writeln!(out, "Player {} wins!", i + 1),
        GameOutcome::Tie => writeln!(out, "It's a tie!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entities::spawn_players;

    #[test]
    fn test_render_empty_board_with_players() {
        let rendered = render_board(&Board::empty(), &spawn_players());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "P1 - - - - -");
        assert_eq!(lines[5], "- - - - - P2");
        assert_eq!(lines[2], "- - - - - -");
    }

    #[test]
    fn test_render_features() {
        let board = Board::with_features(&[Position::new(1, 0)], &[Position::new(2, 0)]);
        let rendered = render_board(&board, &[]);
        assert_eq!(rendered.lines().next(), Some("- O G - - -"));
        assert!(rendered.split_whitespace().count() == 36);
    }

    #[test]
    fn test_player_marker_hides_cell() {
        let board = Board::with_features(&[], &[Position::new(0, 0)]);
        let mut players = spawn_players();
        assert!(render_board(&board, &players).starts_with("P1 "));

        // Both players on one cell: player 1 wins the draw.
        players[1].pos = Position::new(0, 0);
        assert!(render_board(&board, &players).starts_with("P1 - "));
        assert!(!render_board(&board, &players).contains("P2"));
    }

    #[test]
    fn test_print_summary_lines() {
        let mut players = spawn_players();
        players[1].award_gem();
        let mut out = Vec::new();
        print_summary(&mut out, &players, GameOutcome::Winner(1)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Game Over! P1 collected 0 gems. P2 collected 1 gems.\nPlayer 2 wins!\n");
    }
}
