//! Core types: errors, players, RNG, configuration.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, JumpSpec, SEED_ENV_VAR};
pub use error::{ConfigError, GameError, Result};
pub use player::{Player, PlayerId};
pub use rng::{GameRng, GameRngState};
