//! Move resolution outcomes and the per-move history record.

use serde::{Deserialize, Serialize};

/// How a single move resolved.
///
/// Exactly one kind applies per move: an overshoot is detected before the
/// landing tile is inspected, and the board invariants guarantee a tile is
/// never both a snake mouth and a ladder foot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Landed on an ordinary tile.
    Plain {
        /// Tile before the move.
        from: u16,
        /// Tile after the move.
        to: u16,
    },
    /// Landed on a ladder foot and climbed to its top.
    Climbed {
        /// Tile before the move.
        from: u16,
        /// The ladder foot the roll landed on.
        rolled_to: u16,
        /// The ladder top the player climbed to.
        to: u16,
    },
    /// Landed on a snake mouth and slid down to its tail.
    Bitten {
        /// Tile before the move.
        from: u16,
        /// The snake mouth the roll landed on.
        rolled_to: u16,
        /// The snake tail the player slid down to.
        to: u16,
    },
    /// The roll would have moved past the final tile; the move is
    /// forfeited and the player stays put.
    Overshoot {
        /// The unchanged tile.
        position: u16,
        /// Exact roll still needed to win.
        needed: u16,
    },
}

impl MoveOutcome {
    /// The player's tile after this move resolved.
    #[must_use]
    pub fn landed_on(&self) -> u16 {
        match *self {
            MoveOutcome::Plain { to, .. }
            | MoveOutcome::Climbed { to, .. }
            | MoveOutcome::Bitten { to, .. } => to,
            MoveOutcome::Overshoot { position, .. } => position,
        }
    }

    /// Whether the move was forfeited for overshooting the final tile.
    #[must_use]
    pub fn is_overshoot(&self) -> bool {
        matches!(self, MoveOutcome::Overshoot { .. })
    }
}

/// One entry in the engine's move history.
///
/// The history makes turn sequencing explicit and reproducible: replaying
/// the recorded rolls against the same board yields the same game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: String,

    /// The roll that was applied.
    pub roll: u8,

    /// How the move resolved.
    pub outcome: MoveOutcome,

    /// Turn number of this move (starts at 1).
    pub turn: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: impl Into<String>, roll: u8, outcome: MoveOutcome, turn: u32) -> Self {
        Self {
            player: player.into(),
            roll,
            outcome,
            turn,
        }
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.outcome {
            MoveOutcome::Plain { from, to } => write!(
                f,
                "{} rolled a {} and moved from {} to {}",
                self.player, self.roll, from, to
            ),
            MoveOutcome::Climbed { from, rolled_to, to } => write!(
                f,
                "{} rolled a {} and moved from {} to {}, then climbed a ladder to {}",
                self.player, self.roll, from, rolled_to, to
            ),
            MoveOutcome::Bitten { from, rolled_to, to } => write!(
                f,
                "{} rolled a {} and moved from {} to {}, then a snake bit and dropped them to {}",
                self.player, self.roll, from, rolled_to, to
            ),
            MoveOutcome::Overshoot { position, needed } => write!(
                f,
                "{} rolled a {} but needs exactly {} to win, staying on {}",
                self.player, self.roll, needed, position
            ),
        }
    }
}
