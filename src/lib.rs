//! # snakes-ladders
//!
//! A Snakes and Ladders simulator: players take turns rolling dice until
//! one lands exactly on the last cell.
//!
//! ## Design Principles
//!
//! 1. **Values, not pointers**: the board owns its cells in a `Vec`, the
//!    game owns its players in a table, and the turn order is a queue of
//!    `PlayerId`s.
//!
//! 2. **Kind follows geometry**: a jump going down is a snake, a jump going
//!    up is a ladder. Callers only supply the two cells.
//!
//! 3. **Injected randomness**: dice draw from a `RollSource`. Production
//!    uses a seeded `GameRng`, seeded once per process; tests script exact
//!    faces with `FixedRolls`.
//!
//! 4. **Fail at setup**: every layout mistake is a `ConfigError` raised
//!    while building. The turn loop itself does arithmetic and lookups.
//!
//! ## Modules
//!
//! - `core`: errors, players, RNG, configuration
//! - `board`: cells and jump effects
//! - `dice`: dice and randomness sources
//! - `game`: the turn loop, its builder, and turn records

pub mod board;
pub mod core;
pub mod dice;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameError, GameRng, GameRngState, JumpSpec, Player, PlayerId, Result,
};

pub use crate::board::{Board, Cell, JumpEffect, JumpKind};

pub use crate::dice::{Dice, FixedRolls, Roll, RollSource};

pub use crate::game::{Game, GameBuilder, GamePhase, GameResult, TurnOutcome, TurnRecord};
