//! The game-state engine.
//!
//! `GameEngine` owns the board, the roster, and the dice, and applies every
//! state transition: registration, move resolution, win detection. It never
//! performs I/O; an external driver prompts players, calls
//! [`GameEngine::roll_and_move`] (or rolls and moves separately), and
//! renders the returned outcomes.
//!
//! ## Game lifecycle
//!
//! ```text
//! Setup --(first move)--> InProgress --(a player reaches the last tile)--> Finished
//! ```
//!
//! Registration is only accepted during `Setup`; no move is processed once
//! `Finished`. Both transitions are one-way.
//!
//! ## Turn order
//!
//! Turn order is the roster's registration order. The engine does not
//! police whose turn it is (call serialization is the driver's contract),
//! but every processed move lands in [`GameEngine::history`] with its turn
//! number, so a finished game can be audited or replayed.

pub mod outcome;

pub use outcome::{MoveOutcome, MoveRecord};

use serde::{Deserialize, Serialize};

use crate::core::{Board, DiceRng, GameError, Player, Roster, TokenColor};

/// Game-level lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Accepting player registrations; no move made yet.
    Setup,
    /// Turns proceeding.
    InProgress,
    /// A player has won. Terminal.
    Finished,
}

/// The Snakes and Ladders game engine.
///
/// One instance per game session: construct, register 2-8 players, then
/// loop turns until [`GameEngine::winner`] is set.
///
/// ```
/// use rust_snl::{GameEngine, TokenColor};
///
/// let mut game = GameEngine::classic(42);
/// game.add_player("alice", TokenColor::Red).unwrap();
/// game.add_player("bob", TokenColor::Blue).unwrap();
///
/// while game.winner().is_none() {
///     for name in ["alice", "bob"] {
///         let (_roll, _outcome) = game.roll_and_move(name).unwrap();
///         if game.has_won(name).unwrap() {
///             break;
///         }
///     }
/// }
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    board: Board,
    roster: Roster,
    rng: DiceRng,
    phase: GamePhase,
    turns_played: u32,
    history: Vec<MoveRecord>,
    winner: Option<String>,
}

impl GameEngine {
    /// Create an engine for the given board with a seeded die.
    #[must_use]
    pub fn new(board: Board, seed: u64) -> Self {
        Self::with_rng(board, DiceRng::new(seed))
    }

    /// Create an engine on the classic 100-tile board with a seeded die.
    #[must_use]
    pub fn classic(seed: u64) -> Self {
        Self::new(Board::classic(), seed)
    }

    /// Create an engine with a die seeded from OS entropy.
    #[must_use]
    pub fn from_entropy(board: Board) -> Self {
        Self::with_rng(board, DiceRng::from_entropy())
    }

    /// Create an engine with an explicit die.
    #[must_use]
    pub fn with_rng(board: Board, rng: DiceRng) -> Self {
        Self {
            board,
            roster: Roster::new(),
            rng,
            phase: GamePhase::Setup,
            turns_played: 0,
            history: Vec::new(),
            winner: None,
        }
    }

    // === Setup ===

    /// Register a player on the starting tile.
    ///
    /// Fails with [`GameError::DuplicatePlayer`] if the name is taken and
    /// with [`GameError::RegistrationClosed`] once play has begun.
    pub fn add_player(
        &mut self,
        name: impl Into<String>,
        token: TokenColor,
    ) -> Result<(), GameError> {
        if self.phase != GamePhase::Setup {
            return Err(GameError::RegistrationClosed);
        }
        self.roster.add(name, token)
    }

    // === Turns ===

    /// Roll the die: a uniform value in `[1, 6]`.
    ///
    /// The companion to [`GameEngine::move_player`], which takes the roll
    /// as a plain value so movement stays deterministic and testable.
    pub fn roll_dice(&mut self) -> u8 {
        self.rng.roll()
    }

    /// Apply a roll to a player and resolve the landing tile.
    ///
    /// Resolution order: an overshoot (past the final tile) forfeits the
    /// move before the landing tile is inspected; otherwise the landing
    /// tile's ladder or snake applies, or the move is plain. The player's
    /// stored position is updated on every non-overshoot outcome, and a
    /// [`MoveRecord`] is appended to the history.
    ///
    /// Reaching the final tile wins: the engine moves to
    /// [`GamePhase::Finished`] and rejects all further moves.
    pub fn move_player(&mut self, name: &str, roll: u8) -> Result<MoveOutcome, GameError> {
        if !(1..=6).contains(&roll) {
            return Err(GameError::InvalidRoll(roll));
        }
        if self.phase == GamePhase::Finished {
            return Err(GameError::GameFinished);
        }

        let player = self
            .roster
            .get_mut(name)
            .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))?;

        self.phase = GamePhase::InProgress;

        let size = self.board.size();
        let from = player.position();
        // Resolve in u32 so a roll near u16::MAX-sized boards cannot wrap.
        let tentative = u32::from(from) + u32::from(roll);

        let outcome = if tentative > u32::from(size) {
            MoveOutcome::Overshoot {
                position: from,
                needed: size - from,
            }
        } else {
            let rolled_to = tentative as u16;
            if let Some(top) = self.board.ladder_at(rolled_to) {
                MoveOutcome::Climbed { from, rolled_to, to: top }
            } else if let Some(tail) = self.board.snake_at(rolled_to) {
                MoveOutcome::Bitten { from, rolled_to, to: tail }
            } else {
                MoveOutcome::Plain { from, to: rolled_to }
            }
        };

        if !outcome.is_overshoot() {
            player.set_position(outcome.landed_on());
        }

        if player.position() == size {
            self.phase = GamePhase::Finished;
            self.winner = Some(name.to_string());
        }

        self.turns_played += 1;
        self.history
            .push(MoveRecord::new(name, roll, outcome, self.turns_played));

        Ok(outcome)
    }

    /// Roll the die and move in one call: one driver turn.
    ///
    /// Validates the player and phase before consuming a roll, so a failed
    /// call never advances the dice sequence.
    pub fn roll_and_move(&mut self, name: &str) -> Result<(u8, MoveOutcome), GameError> {
        if self.phase == GamePhase::Finished {
            return Err(GameError::GameFinished);
        }
        if !self.roster.contains(name) {
            return Err(GameError::UnknownPlayer(name.to_string()));
        }

        let roll = self.rng.roll();
        let outcome = self.move_player(name, roll)?;
        Ok((roll, outcome))
    }

    // === Queries ===

    /// A player's current tile.
    pub fn position(&self, name: &str) -> Result<u16, GameError> {
        self.roster
            .get(name)
            .map(Player::position)
            .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))
    }

    /// Whether a player stands on the final tile.
    ///
    /// Fails on unknown names, matching the other accessors.
    pub fn has_won(&self, name: &str) -> Result<bool, GameError> {
        Ok(self.position(name)? == self.board.size())
    }

    /// The winner's name, once a player has reached the final tile.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The board configuration.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The roster, in turn order.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Number of moves processed so far (overshoots included).
    #[must_use]
    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    /// All processed moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// The die's seed, for replaying a session.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}
