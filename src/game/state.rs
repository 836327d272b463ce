use serde::{Serialize, Deserialize};
use log::debug;
use rand::Rng;

use crate::config::game::MAX_TURNS;
use crate::game::entities::{Player, spawn_players};
use crate::game::error::GameResult;
use crate::game::grid::{Board, generate_board};
use crate::game::systems::{collect_gem, move_player};
use crate::game::types::{Direction, Position};

/// Where the turn state machine currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for input from the player at this index.
    AwaitingMove(usize),
    GameOver,
}

/// Result of submitting a direction for the active player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Off the board or onto an obstacle. Nothing changed.
    Rejected,
    /// The move was applied and the turn passed to the other player.
    Moved { to: Position, collected_gem: bool },
    /// The game already ended.
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Index of the player with strictly more gems.
    Winner(usize),
    Tie,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub turns: u32,
    pub players: [Player; 2],
    pub outcome: GameOutcome,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub players: [Player; 2],
    current: usize,
    total_turns: u32,
}

impl GameState {
    /// Start a game on a freshly generated board.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> GameResult<Self> {
        Ok(Self::with_board(generate_board(rng)?))
    }

    /// Start a game on a given board, players on their starting corners.
    pub fn with_board(board: Board) -> Self {
        GameState {
            board,
            players: spawn_players(),
            current: 0,
            total_turns: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.is_over() {
            Phase::GameOver
        } else {
            Phase::AwaitingMove(self.current)
        }
    }

    pub fn is_over(&self) -> bool {
        self.total_turns >= MAX_TURNS
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn total_turns(&self) -> u32 {
        self.total_turns
    }

    /// Resolve one move for the active player. Rejected moves consume no turn.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.is_over() {
            return MoveOutcome::GameOver;
        }

        let player = &mut self.players[self.current];
        let Some(to) = move_player(&self.board, player, direction) else {
            debug!("[Game] {} cannot move {:?} from ({}, {})", player.name(), direction, player.pos.x, player.pos.y);
            return MoveOutcome::Rejected;
        };
        let collected_gem = collect_gem(&mut self.board, player);
        debug!("[Game] {} moved {:?} to ({}, {})", player.name(), direction, to.x, to.y);

        self.next_turn();
        MoveOutcome::Moved { to, collected_gem }
    }

    fn next_turn(&mut self) {
        self.current = 1 - self.current;
        self.total_turns += 1;
        debug!("[Game] Turn {} of {} done", self.total_turns, MAX_TURNS);
    }

    /// Strictly more gems wins; equal counts tie.
    pub fn outcome(&self) -> GameOutcome {
        let [a, b] = [self.players[0].gem_count(), self.players[1].gem_count()];
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => GameOutcome::Winner(0),
            std::cmp::Ordering::Less => GameOutcome::Winner(1),
            std::cmp::Ordering::Equal => GameOutcome::Tie,
        }
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            turns: self.total_turns,
            players: self.players.clone(),
            outcome: self.outcome(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Cell;

    #[test]
    fn test_initial_state() {
        let state = GameState::with_board(Board::empty());
        assert_eq!(state.phase(), Phase::AwaitingMove(0));
        assert_eq!(state.total_turns(), 0);
        assert_eq!(state.current_player().name(), "P1");
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut state = GameState::with_board(Board::empty());
        assert_eq!(state.apply_move(Direction::Up), MoveOutcome::Rejected);
        assert_eq!(state.phase(), Phase::AwaitingMove(0));
        assert_eq!(state.total_turns(), 0);
        assert_eq!(state.players[0].pos, Position::new(0, 0));
    }

    #[test]
    fn test_valid_move_swaps_player() {
        let mut state = GameState::with_board(Board::empty());
        assert_eq!(
            state.apply_move(Direction::Right),
            MoveOutcome::Moved { to: Position::new(1, 0), collected_gem: false }
        );
        assert_eq!(state.phase(), Phase::AwaitingMove(1));
        assert_eq!(state.total_turns(), 1);
    }

    #[test]
    fn test_game_ends_after_max_turns() {
        let mut state = GameState::with_board(Board::empty());
        // P1 shuffles right/left, P2 shuffles up/down.
        let script = [Direction::Right, Direction::Up, Direction::Left, Direction::Down];
        for i in 0..MAX_TURNS as usize {
            assert!(matches!(state.apply_move(script[i % 4]), MoveOutcome::Moved { .. }));
        }
        assert_eq!(state.phase(), Phase::GameOver);
        assert_eq!(state.apply_move(Direction::Down), MoveOutcome::GameOver);
        assert_eq!(state.total_turns(), MAX_TURNS);
    }

    #[test]
    fn test_outcome_by_gem_count() {
        let gems = [Position::new(1, 0), Position::new(2, 0)];
        let mut state = GameState::with_board(Board::with_features(&[], &gems));
        assert_eq!(state.outcome(), GameOutcome::Tie);

        state.apply_move(Direction::Right);
        assert_eq!(state.outcome(), GameOutcome::Winner(0));

        state.apply_move(Direction::Up);
        state.apply_move(Direction::Right);
        assert_eq!(state.players[0].gem_count(), 2);
        assert_eq!(state.board.count(Cell::Gem), 0);
        assert_eq!(state.summary().outcome, GameOutcome::Winner(0));
    }

    #[test]
    fn test_player_two_can_win() {
        let mut state = GameState::with_board(Board::with_features(&[], &[Position::new(5, 4)]));
        state.apply_move(Direction::Down);
        state.apply_move(Direction::Up);
        assert_eq!(state.outcome(), GameOutcome::Winner(1));
    }

    #[test]
    fn test_players_may_share_a_cell() {
        let mut state = GameState::with_board(Board::empty());
        state.players[1].pos = Position::new(1, 0);
        assert!(matches!(state.apply_move(Direction::Right), MoveOutcome::Moved { .. }));
        assert_eq!(state.players[0].pos, state.players[1].pos);
    }
}
