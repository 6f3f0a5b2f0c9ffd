//! Game configuration.
//!
//! `GameConfig` is the serializable description of a game: board size,
//! jumps, player names, dice, and an optional seed. The default is the
//! classic layout the binary plays:
//!
//! - 100-cell board
//! - Snakes 14→4 and 99→10, ladders 3→30 and 50→95
//! - Alice and Bob
//! - One six-sided die
//!
//! `SNAKES_SEED` in the environment pins the seed for reproducible runs.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::error::{ConfigError, Result};
use super::rng::GameRng;
use crate::game::{Game, GameBuilder};

/// Environment variable holding a `u64` seed.
pub const SEED_ENV_VAR: &str = "SNAKES_SEED";

/// One jump as written in configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JumpSpec {
    pub origin: u32,
    pub destination: u32,
}

impl JumpSpec {
    #[must_use]
    pub const fn new(origin: u32, destination: u32) -> Self {
        Self {
            origin,
            destination,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Goal cell and win score.
    pub board_size: u32,

    /// Jumps, registered in order.
    #[serde(default)]
    pub jumps: Vec<JumpSpec>,

    /// Player names in turn order.
    pub players: Vec<String>,

    /// Number of dice thrown per turn.
    pub dice_count: u32,

    /// Faces per die.
    pub dice_faces: u32,

    /// Fixed seed. `None` seeds from the clock.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 100,
            jumps: vec![
                JumpSpec::new(14, 4),
                JumpSpec::new(99, 10),
                JumpSpec::new(3, 30),
                JumpSpec::new(50, 95),
            ],
            players: vec!["Alice".to_string(), "Bob".to_string()],
            dice_count: 1,
            dice_faces: 6,
            seed: None,
        }
    }
}

impl GameConfig {
    /// The default layout with `SNAKES_SEED` applied, if set.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidSeed`] if the variable is set but not a `u64`.
    pub fn from_env() -> std::result::Result<Self, ConfigError> {
        Self::default().with_seed_var(std::env::var(SEED_ENV_VAR).ok())
    }

    /// Apply a raw seed string as read from the environment.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidSeed`] if `raw` is present but not a `u64`.
    pub fn with_seed_var(mut self, raw: Option<String>) -> std::result::Result<Self, ConfigError> {
        if let Some(raw) = raw {
            let seed = raw.trim().parse::<u64>().map_err(|_| {
                warn!(value = %raw, "rejecting {}", SEED_ENV_VAR);
                ConfigError::InvalidSeed(raw.clone())
            })?;
            self.seed = Some(seed);
        }
        Ok(self)
    }

    /// Replace the board size.
    #[must_use]
    pub fn with_board_size(mut self, size: u32) -> Self {
        self.board_size = size;
        self
    }

    /// Append a jump.
    #[must_use]
    pub fn with_jump(mut self, origin: u32, destination: u32) -> Self {
        self.jumps.push(JumpSpec::new(origin, destination));
        self
    }

    /// Remove every jump.
    #[must_use]
    pub fn without_jumps(mut self) -> Self {
        self.jumps.clear();
        self
    }

    /// Replace the player list.
    #[must_use]
    pub fn with_players<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.players = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the dice.
    #[must_use]
    pub fn with_dice(mut self, count: u32, faces: u32) -> Self {
        self.dice_count = count;
        self.dice_faces = faces;
        self
    }

    /// Pin the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// A builder pre-loaded with this configuration.
    #[must_use]
    pub fn builder(&self) -> GameBuilder {
        self.jumps
            .iter()
            .fold(GameBuilder::new().board_size(self.board_size), |builder, jump| {
                builder.jump(jump.origin, jump.destination)
            })
            .players(self.players.iter().cloned())
            .dice(self.dice_count, self.dice_faces)
    }

    /// Build a game with production dice.
    ///
    /// The clock is read here, once, when no seed is configured.
    ///
    /// # Errors
    ///
    /// Any invalid setting, as a configuration error.
    pub fn build(&self) -> Result<Game<GameRng>> {
        let seed = self.seed.unwrap_or_else(GameRng::time_seed);
        info!(seed, pinned = self.seed.is_some(), "building game");
        self.builder().build(seed)
    }
}
