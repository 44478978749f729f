use thiserror::Error;

use crate::constants::{MAX_PLAYERS, MIN_PLAYERS};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("a game needs at least {} players", MIN_PLAYERS)]
    NotEnoughPlayers,
    #[error("a game seats at most {} players", MAX_PLAYERS)]
    TooManyPlayers,
    #[error("player names must not be empty")]
    EmptyPlayerName,
    #[error("that card is not in your hand")]
    CardNotInHand,
    #[error("that card does not match the top of the pile")]
    IllegalMove,
    #[error("the draw deck is empty")]
    DeckEmpty,
    #[error("only the card just drawn may be played now")]
    NotDrawnCard,
    #[error("that action is not available right now")]
    ActionNotAllowed,
    #[error("the game is already over")]
    GameFinished,
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;
