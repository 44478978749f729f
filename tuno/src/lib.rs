pub mod card;
pub mod constants;
pub mod deck;
pub mod discard;
pub mod error;
pub mod game;
pub mod player;
pub mod ring;
pub mod turn;
