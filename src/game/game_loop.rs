//! Interactive console loop.
//!
//! Two players share one terminal and take turns typing a direction key.
//! Input and output are generic so the loop can be driven from a script.

use std::io::{BufRead, Write};

use log::{debug, info};

use crate::game::error::{GameError, GameResult};
use crate::game::state::{GameState, GameSummary, MoveOutcome, Phase};
use crate::game::systems::{print_board, print_summary};
use crate::game::types::Direction;

const INVALID_MOVE: &str = "Invalid move. Try again (U/D/L/R): ";

/// Read one line and return its first non-whitespace character, if any.
/// Bytes that are not UTF-8 decode to U+FFFD and are rejected like any other key.
fn read_key<R: BufRead>(input: &mut R) -> GameResult<Option<char>> {
    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        return Err(GameError::InputClosed);
    }
    Ok(String::from_utf8_lossy(&line).trim().chars().next())
}

/// Run the game to completion and return the final summary.
pub fn run_game_loop<R: BufRead, W: Write>(
    state: &mut GameState,
    input: &mut R,
    output: &mut W,
) -> GameResult<GameSummary> {
    info!("[Game] Game start!");

    while let Phase::AwaitingMove(current) = state.phase() {
        print_board(output, &state.board, &state.players)?;
        writeln!(output, "{}'s turn. Move (U/D/L/R): ", state.current_player().name())?;
        output.flush()?;

        loop {
            let key = read_key(input)?;
            match key.and_then(Direction::from_key).map(|d| state.apply_move(d)) {
                Some(MoveOutcome::Moved { to, collected_gem }) => {
                    if collected_gem {
                        info!("[Game] {} picked up a gem at ({}, {})", state.players[current].name(), to.x, to.y);
                    }
                    break;
                }
                Some(MoveOutcome::GameOver) => break,
                Some(MoveOutcome::Rejected) => {}
                None => debug!("[Game] Unrecognised key {:?}", key),
            }
            writeln!(output, "{INVALID_MOVE}")?;
            output.flush()?;
        }
    }

    let summary = state.summary();
    print_board(output, &state.board, &state.players)?;
    print_summary(output, &state.players, summary.outcome)?;
    output.flush()?;
    info!("[Game] Game over after {} turns: {:?}", state.total_turns(), summary.outcome);
    Ok(summary)
}
