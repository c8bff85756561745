//! Error types for engine operations.
//!
//! Every failure here is a recoverable input-validation condition. The
//! engine performs no I/O and never panics on bad caller input; drivers
//! translate these into user-facing messages and re-prompt or abort the
//! current action.

use thiserror::Error;

/// Errors returned by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// An operation referenced a player name not in the roster.
    #[error("unknown player: {0}")]
    UnknownPlayer(String),

    /// A registration reused an already-taken player name.
    #[error("player name already taken: {0}")]
    DuplicatePlayer(String),

    /// A roll value outside `[1, 6]` was passed to `move_player`.
    #[error("roll must be in 1..=6, got {0}")]
    InvalidRoll(u8),

    /// A board configuration violated a construction invariant.
    #[error("invalid board configuration: {0}")]
    InvalidConfiguration(String),

    /// A move was attempted after a player already won.
    #[error("game is finished, no further moves are accepted")]
    GameFinished,

    /// A registration was attempted after play began.
    #[error("players can only be registered before the first move")]
    RegistrationClosed,
}
