//! Error types.
//!
//! Two families, matching when they can happen:
//!
//! - [`ConfigError`]: raised while building a game (board, jumps, dice,
//!   players). Setup has to be redone with valid values.
//! - [`GameError`]: everything the running game can report, including a
//!   wrapped [`ConfigError`] so setup and play share one `Result` type.

use crate::board::JumpEffect;

/// Errors raised while setting up a game.
///
/// A rejected operation never leaves the target partially modified.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The board needs at least one cell beyond the start square.
    #[error("board size must be at least 1, got {0}")]
    BoardTooSmall(u32),

    /// Jumps may only start on cells strictly between the start and the goal.
    #[error("jump origin {origin} is not a playable cell on a board of size {size}")]
    OriginOutOfBounds {
        /// Requested origin.
        origin: u32,
        /// Board size.
        size: u32,
    },

    /// Jumps must land on the board.
    #[error("jump destination {destination} is outside the board 0..={size}")]
    DestinationOutOfBounds {
        /// Requested destination.
        destination: u32,
        /// Board size.
        size: u32,
    },

    /// Origin and destination are the same cell.
    #[error("jump at cell {0} starts and ends on the same cell")]
    DegenerateJump(u32),

    /// A cell can hold only one jump.
    #[error("cell {origin} already holds {existing}")]
    DuplicateJump {
        /// Contested origin.
        origin: u32,
        /// The jump registered first.
        existing: JumpEffect,
    },

    /// Dice count must be positive.
    #[error("dice count must be at least 1")]
    NoDice,

    /// Face count must be positive.
    #[error("dice must have at least 1 face")]
    NoFaces,

    /// A game without players has no turn order.
    #[error("a game needs at least one player")]
    NoPlayers,

    /// Player ids are `u8`.
    #[error("at most 255 players supported, got {0}")]
    TooManyPlayers(usize),

    /// `SNAKES_SEED` did not parse as a `u64`.
    #[error("invalid seed {0:?}, expected an unsigned 64-bit integer")]
    InvalidSeed(String),
}

/// Errors surfaced by the game.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Setup failed.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// A cell lookup fell outside the board.
    ///
    /// The turn loop never asks for such a cell once overshoot is handled,
    /// so seeing this means the position arithmetic is broken.
    #[error("position {position} is outside the board 0..={size}")]
    OutOfRange {
        /// Requested position.
        position: u32,
        /// Board size.
        size: u32,
    },

    /// A turn was requested after a player already won.
    #[error("the game is already finished")]
    GameOver,
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GameError>;
