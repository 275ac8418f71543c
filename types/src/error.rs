use thiserror::Error;

use crate::Action;

#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("Input closed before a move was chosen")]
    InputClosed,

    #[error("Malformed input: {0:?}")]
    MalformedInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum GameError {
    #[error("A game needs 2 to 4 players, got {0}")]
    InvalidPlayerCount(usize),

    #[error("Deck too small to deal: need {needed} cards, have {available}")]
    DeckTooSmall { needed: usize, available: usize },

    #[error("Illegal action {action}: {reason}")]
    IllegalAction { action: Action, reason: String },

    #[error("The game is already over")]
    GameOver,

    #[error("Strategy failed: {0}")]
    Strategy(#[from] StrategyError),
}
