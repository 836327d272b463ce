//! Game error types.
//!
//! Invalid moves are not errors: the turn loop recovers from them by
//! re-prompting. Only setup and console failures end up here.

use thiserror::Error;

use crate::game::types::Cell;

#[derive(Debug, Error)]
pub enum GameError {
    /// The board cannot fit the requested number of features.
    #[error("cannot place {requested} {feature:?} cell(s): only {free} free cell(s) on the board")]
    PlacementExhausted {
        feature: Cell,
        requested: usize,
        free: usize,
    },

    /// Standard input reached end of file before the game finished.
    #[error("input closed before the game finished")]
    InputClosed,

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize game summary: {0}")]
    Summary(#[from] serde_json::Error),
}

pub type GameResult<T> = Result<T, GameError>;
