//! Board configuration: size, snakes, ladders.
//!
//! A board is immutable once built. Construction goes through
//! [`BoardBuilder`], which validates the configuration invariants:
//!
//! - every snake and ladder endpoint lies in `[1, size]`
//! - a snake descends (destination strictly below its mouth)
//! - a ladder climbs (destination strictly above its foot)
//! - no tile is both a snake mouth and a ladder foot
//!
//! Those invariants guarantee that at most one jump applies to any tile a
//! player lands on, so move resolution never has to break ties.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::GameError;

/// The classic snake table (mouth -> tail).
const CLASSIC_SNAKES: [(u16, u16); 10] = [
    (16, 6),
    (46, 25),
    (49, 11),
    (62, 19),
    (64, 60),
    (74, 53),
    (89, 68),
    (92, 88),
    (95, 75),
    (99, 80),
];

/// The classic ladder table (foot -> top).
const CLASSIC_LADDERS: [(u16, u16); 11] = [
    (2, 38),
    (7, 14),
    (8, 31),
    (15, 26),
    (21, 42),
    (28, 84),
    (36, 44),
    (51, 67),
    (71, 91),
    (78, 98),
    (87, 94),
];

/// An immutable board: final tile number plus the snake and ladder tables.
///
/// Tiles are numbered from 1; reaching tile `size` wins the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: u16,
    snakes: FxHashMap<u16, u16>,
    ladders: FxHashMap<u16, u16>,
}

impl Board {
    /// The classic 100-tile board with the standard snake and ladder
    /// layout.
    #[must_use]
    pub fn classic() -> Self {
        let mut builder = BoardBuilder::new().size(100);
        for (mouth, tail) in CLASSIC_SNAKES {
            builder = builder.snake(mouth, tail);
        }
        for (foot, top) in CLASSIC_LADDERS {
            builder = builder.ladder(foot, top);
        }
        builder.build().expect("classic layout satisfies invariants")
    }

    /// Start building a custom board.
    #[must_use]
    pub fn builder() -> BoardBuilder {
        BoardBuilder::new()
    }

    /// The final (winning) tile number.
    #[must_use]
    pub fn size(&self) -> u16 {
        self.size
    }

    /// The tail tile if `tile` is a snake mouth.
    #[must_use]
    pub fn snake_at(&self, tile: u16) -> Option<u16> {
        self.snakes.get(&tile).copied()
    }

    /// The top tile if `tile` is a ladder foot.
    #[must_use]
    pub fn ladder_at(&self, tile: u16) -> Option<u16> {
        self.ladders.get(&tile).copied()
    }

    /// Number of snakes on the board.
    #[must_use]
    pub fn snake_count(&self) -> usize {
        self.snakes.len()
    }

    /// Number of ladders on the board.
    #[must_use]
    pub fn ladder_count(&self) -> usize {
        self.ladders.len()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::classic()
    }
}

/// Builder for custom boards.
///
/// ```
/// use rust_snl::core::Board;
///
/// let board = Board::builder()
///     .size(20)
///     .snake(18, 3)
///     .ladder(4, 15)
///     .build()
///     .unwrap();
///
/// assert_eq!(board.size(), 20);
/// assert_eq!(board.snake_at(18), Some(3));
/// assert_eq!(board.ladder_at(4), Some(15));
/// ```
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    size: u16,
    snakes: Vec<(u16, u16)>,
    ladders: Vec<(u16, u16)>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self {
            size: 100,
            snakes: Vec::new(),
            ladders: Vec::new(),
        }
    }
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the final tile number.
    #[must_use]
    pub fn size(mut self, size: u16) -> Self {
        self.size = size;
        self
    }

    /// Add a snake from `mouth` down to `tail`.
    #[must_use]
    pub fn snake(mut self, mouth: u16, tail: u16) -> Self {
        self.snakes.push((mouth, tail));
        self
    }

    /// Add a ladder from `foot` up to `top`.
    #[must_use]
    pub fn ladder(mut self, foot: u16, top: u16) -> Self {
        self.ladders.push((foot, top));
        self
    }

    /// Validate the configuration and build the board.
    pub fn build(self) -> Result<Board, GameError> {
        let invalid = |reason: String| GameError::InvalidConfiguration(reason);

        if self.size < 2 {
            return Err(invalid(format!(
                "board size must be at least 2, got {}",
                self.size
            )));
        }

        let in_range = |tile: u16| (1..=self.size).contains(&tile);

        let mut snakes = FxHashMap::default();
        for (mouth, tail) in self.snakes {
            if !in_range(mouth) || !in_range(tail) {
                return Err(invalid(format!(
                    "snake {}->{} leaves the board (tiles 1..={})",
                    mouth, tail, self.size
                )));
            }
            if tail >= mouth {
                return Err(invalid(format!("snake {}->{} must descend", mouth, tail)));
            }
            if snakes.insert(mouth, tail).is_some() {
                return Err(invalid(format!("tile {} has two snakes", mouth)));
            }
        }

        let mut ladders = FxHashMap::default();
        for (foot, top) in self.ladders {
            if !in_range(foot) || !in_range(top) {
                return Err(invalid(format!(
                    "ladder {}->{} leaves the board (tiles 1..={})",
                    foot, top, self.size
                )));
            }
            if top <= foot {
                return Err(invalid(format!("ladder {}->{} must climb", foot, top)));
            }
            if ladders.insert(foot, top).is_some() {
                return Err(invalid(format!("tile {} has two ladders", foot)));
            }
            if snakes.contains_key(&foot) {
                return Err(invalid(format!(
                    "tile {} is both a snake mouth and a ladder foot",
                    foot
                )));
            }
        }

        Ok(Board {
            size: self.size,
            snakes,
            ladders,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_layout() {
        let board = Board::classic();

        assert_eq!(board.size(), 100);
        assert_eq!(board.snake_count(), 10);
        assert_eq!(board.ladder_count(), 11);

        assert_eq!(board.snake_at(99), Some(80));
        assert_eq!(board.snake_at(16), Some(6));
        assert_eq!(board.ladder_at(2), Some(38));
        assert_eq!(board.ladder_at(87), Some(94));

        // Plain tiles carry no jump.
        assert_eq!(board.snake_at(50), None);
        assert_eq!(board.ladder_at(50), None);
    }

    #[test]
    fn test_default_is_classic() {
        assert_eq!(Board::default(), Board::classic());
    }

    #[test]
    fn test_custom_board() {
        let board = Board::builder()
            .size(30)
            .snake(27, 5)
            .ladder(3, 22)
            .build()
            .unwrap();

        assert_eq!(board.size(), 30);
        assert_eq!(board.snake_at(27), Some(5));
        assert_eq!(board.ladder_at(3), Some(22));
    }

    #[test]
    fn test_rejects_tiny_board() {
        let err = Board::builder().size(1).build().unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_rejects_out_of_range_endpoints() {
        let err = Board::builder().size(50).snake(60, 10).build().unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration(_)));

        let err = Board::builder().size(50).ladder(10, 60).build().unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration(_)));

        let err = Board::builder().size(50).snake(10, 0).build().unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_rejects_non_descending_snake() {
        let err = Board::builder().size(50).snake(10, 20).build().unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration(_)));

        let err = Board::builder().size(50).snake(10, 10).build().unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_rejects_non_climbing_ladder() {
        let err = Board::builder().size(50).ladder(20, 10).build().unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration(_)));

        let err = Board::builder().size(50).ladder(20, 20).build().unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_rejects_overlapping_sources() {
        let err = Board::builder()
            .size(50)
            .snake(20, 5)
            .ladder(20, 40)
            .build()
            .unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_rejects_duplicate_sources() {
        let err = Board::builder()
            .size(50)
            .snake(20, 5)
            .snake(20, 8)
            .build()
            .unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_board_serialization() {
        let board = Board::classic();
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
