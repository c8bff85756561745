//! # rust-snl
//!
//! A deterministic Snakes and Ladders game engine.
//!
//! ## Design Principles
//!
//! 1. **Engine, Not Driver**: The crate owns every state transition, from
//!    registration through move resolution to win detection, and performs
//!    no I/O. Prompting, rendering, and turn pacing belong to an external
//!    driver.
//!
//! 2. **Randomness at the Edge**: Dice rolls enter through a single seeded
//!    entry point (`DiceRng` / `GameEngine::roll_dice`). Movement itself
//!    takes the roll as a plain value, so the whole resolution algorithm is
//!    deterministic and testable without entropy.
//!
//! 3. **Explicit Turn Order**: The roster's registration order is the turn
//!    order, and every processed move is recorded with its turn number.
//!    Nothing depends on map iteration order.
//!
//! ## Modules
//!
//! - `core`: Board configuration, players and roster, dice, errors
//! - `engine`: The game engine, move outcomes, move history

pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{Board, BoardBuilder, DiceRng, GameError, Player, Roster, TokenColor};

pub use crate::engine::{GameEngine, GamePhase, MoveOutcome, MoveRecord};
