use thiserror::Error;

use crate::session::PlayState;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("deck is empty")]
    EmptyDeck,
    #[error("operation requires the '{required}' state, but the session is in '{actual}'")]
    IllegalState {
        required: PlayState,
        actual: PlayState,
    },
    #[error("cannot score a hand with empty slots")]
    InvalidHand,
    #[error("invalid saved session: {0}")]
    InvalidSave(String),
}
