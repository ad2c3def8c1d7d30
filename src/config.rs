use crate::{BOARD_SIZE_LIMIT, TILES_LEN, TILE_LIMIT};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// The default number of rows (and columns) of board cells. `6` rows.
pub const DEFAULT_BOARD_SIZE: usize = 6;
/// The default number of times every unique [tile](crate::Tile) is copied in the pool.
/// `3` copies of each [tile](crate::Tile).
pub const DEFAULT_NO_SETS: usize = 3;
/// The default number of [tiles](crate::Tile) in a hand. `6` [tiles](crate::Tile) per hand.
pub const DEFAULT_HAND_SIZE: usize = 6;

/// Everything needed to lay out a [game session](crate::GameSession).
///
/// Missing fields take their default when deserialized.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of rows (and columns) of board cells.
    pub board_size: usize,
    /// Number of copies of every unique [tile](crate::Tile) in the pool.
    pub no_sets: usize,
    /// Number of [tiles](crate::Tile) drawn into the hand.
    pub hand_size: usize,
    /// Width of the window in pixels. The board and the hand are centered on it.
    pub window_width: f32,
    /// Height of the window in pixels.
    pub window_height: f32,
    /// Scale of [tiles](crate::Tile) resting in hand.
    pub hand_scale: f32,
    /// Scale of the board background and of [tiles](crate::Tile) dragged onto it.
    pub board_scale: f32,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            board_size: DEFAULT_BOARD_SIZE,
            no_sets: DEFAULT_NO_SETS,
            hand_size: DEFAULT_HAND_SIZE,
            window_width: 800.0,
            window_height: 600.0,
            hand_scale: 1.0,
            board_scale: 2.0,
        }
    }
}

/// Describes the reason why a [GameConfig] cannot start a [game session](crate::GameSession).
#[derive(Error, Debug, Clone, Eq, PartialEq, Hash)]
pub enum ConfigError {
    /// Attempting to start with no board cells.
    #[error("the board must have at least one row")]
    EmptyBoard,
    /// Attempting to start with more rows than the [board size limit](BOARD_SIZE_LIMIT).
    #[error("a board of {board_size} rows exceeds the limit of {}", BOARD_SIZE_LIMIT)]
    BoardTooLarge {
        /// The requested number of rows.
        board_size: usize,
    },
    /// Attempting to start with an empty pool.
    #[error("the pool must contain at least one set")]
    EmptyPool,
    /// Attempting to start with an empty hand.
    #[error("the hand must hold at least one tile")]
    EmptyHand,
    /// Attempting to request more [tiles](crate::Tile) than [tiles](crate::Tile) in the pool.
    #[error("the hand requests {requested_tiles} tiles but the pool holds {tiles_in_pool}")]
    NotEnoughTiles {
        /// The number of [tiles](crate::Tile) requested for the hand.
        requested_tiles: usize,
        /// The number of [tiles](crate::Tile) the pool would hold.
        tiles_in_pool: usize,
    },
    /// Attempting to create more [tiles](crate::Tile) than the [tile limit](TILE_LIMIT).
    #[error("a pool of {tiles_in_pool} tiles exceeds the limit of {}", TILE_LIMIT)]
    TooManyTiles {
        /// The number of [tiles](crate::Tile) the pool would hold.
        tiles_in_pool: usize,
    },
    /// Attempting to start with a window, hand scale, or board scale that is zero,
    /// negative, or not finite.
    #[error("window sizes and scales must be positive and finite")]
    NonPositiveDimension,
}

impl GameConfig {
    /// Checks that the board, the pool, and the hand are non-empty, that the hand does not
    /// request more [tiles](crate::Tile) than the pool holds, that the pool and the board stay
    /// within their limits, and that every dimension is positive.
    ///
    /// # Errors
    ///
    /// Every [ConfigError] that applies, collected together.
    pub fn check(&self) -> Result<(), HashSet<ConfigError>> {
        let mut errors = HashSet::with_capacity(7);
        if self.board_size == 0 {
            errors.insert(ConfigError::EmptyBoard);
        }
        if self.board_size > BOARD_SIZE_LIMIT {
            errors.insert(ConfigError::BoardTooLarge {
                board_size: self.board_size,
            });
        }
        if self.no_sets == 0 {
            errors.insert(ConfigError::EmptyPool);
        }
        if self.hand_size == 0 {
            errors.insert(ConfigError::EmptyHand);
        }

        let tiles_in_pool = TILES_LEN.saturating_mul(self.no_sets);
        if self.hand_size > tiles_in_pool {
            errors.insert(ConfigError::NotEnoughTiles {
                requested_tiles: self.hand_size,
                tiles_in_pool,
            });
        }
        if tiles_in_pool > TILE_LIMIT {
            errors.insert(ConfigError::TooManyTiles { tiles_in_pool });
        }

        let dimensions = [
            self.window_width,
            self.window_height,
            self.hand_scale,
            self.board_scale,
        ];
        if dimensions
            .iter()
            .any(|&dimension| !dimension.is_finite() || dimension <= 0.0)
        {
            errors.insert(ConfigError::NonPositiveDimension);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(())
    }

    /// The number of [tiles](crate::Tile) in a new pool.
    #[inline]
    pub fn pool_len(&self) -> usize {
        TILES_LEN * self.no_sets
    }
}
