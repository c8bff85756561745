//! Core building blocks: board configuration, players, dice, errors.
//!
//! These types are owned by the engine; drivers interact with them through
//! `GameEngine` and read-only accessors.

pub mod board;
pub mod error;
pub mod player;
pub mod rng;

pub use board::{Board, BoardBuilder};
pub use error::GameError;
pub use player::{Player, Roster, TokenColor};
pub use rng::DiceRng;
