//! Players, tokens, and the turn-ordered roster.
//!
//! ## Roster
//!
//! Players are stored in registration order, and that order *is* the turn
//! order. The original pencil-and-paper convention applies: whoever sits
//! down first rolls first. Lookup is by name; names are unique within a
//! roster.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::GameError;

/// Token colors from the fixed 8-color palette.
///
/// Purely a display attribute: the token a player pushes around the board
/// has no effect on movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenColor {
    Red,
    Blue,
    Green,
    Yellow,
    Black,
    White,
    Orange,
    Purple,
}

impl TokenColor {
    /// All palette colors, in the order a driver hands them out.
    ///
    /// ```
    /// use rust_snl::core::TokenColor;
    ///
    /// let palette: Vec<_> = TokenColor::all().collect();
    /// assert_eq!(palette.len(), 8);
    /// assert_eq!(palette[0], TokenColor::Red);
    /// ```
    pub fn all() -> impl Iterator<Item = TokenColor> {
        [
            TokenColor::Red,
            TokenColor::Blue,
            TokenColor::Green,
            TokenColor::Yellow,
            TokenColor::Black,
            TokenColor::White,
            TokenColor::Orange,
            TokenColor::Purple,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for TokenColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenColor::Red => "red",
            TokenColor::Blue => "blue",
            TokenColor::Green => "green",
            TokenColor::Yellow => "yellow",
            TokenColor::Black => "black",
            TokenColor::White => "white",
            TokenColor::Orange => "orange",
            TokenColor::Purple => "purple",
        };
        write!(f, "{}", name)
    }
}

/// A registered player: unique name, token, current tile.
///
/// Positions are 1-based and always within `[1, board size]`. Every player
/// starts on tile 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    token: TokenColor,
    position: u16,
}

impl Player {
    /// Starting tile for every player.
    pub const START: u16 = 1;

    /// Create a player on the starting tile.
    #[must_use]
    pub fn new(name: impl Into<String>, token: TokenColor) -> Self {
        Self {
            name: name.into(),
            token,
            position: Self::START,
        }
    }

    /// The player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's token color.
    #[must_use]
    pub fn token(&self) -> TokenColor {
        self.token
    }

    /// The player's current tile.
    #[must_use]
    pub fn position(&self) -> u16 {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: u16) {
        self.position = position;
    }
}

/// The turn-ordered player roster.
///
/// Backed by a `SmallVec` sized for the classic 2-8 seat game, so typical
/// rosters live inline without heap allocation. Registration order is turn
/// order; players are added once before play and never removed mid-game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: SmallVec<[Player; 8]>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a player.
    ///
    /// Rejects a name already present in the roster. The original
    /// dictionary-keyed storage silently overwrote on reuse, losing the
    /// first player's position.
    pub fn add(&mut self, name: impl Into<String>, token: TokenColor) -> Result<(), GameError> {
        let name = name.into();
        if self.contains(&name) {
            return Err(GameError::DuplicatePlayer(name));
        }
        self.players.push(Player::new(name, token));
        Ok(())
    }

    /// Whether a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.name() == name)
    }

    /// Look up a player by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.name() == name)
    }

    /// Number of registered players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Iterate over players in turn order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Iterate over player names in turn order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(Player::name)
    }
}
