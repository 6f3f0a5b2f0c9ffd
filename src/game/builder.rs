//! Fluent game setup.

use tracing::info;

use crate::board::Board;
use crate::core::{GameRng, Player, Result};
use crate::dice::{Dice, RollSource};

use super::game::Game;

/// Builder for creating a [`Game`].
///
/// Nothing is validated until [`build`](Self::build), which reports the
/// first invalid setting as a configuration error.
///
/// ```
/// use snakes_ladders::game::GameBuilder;
///
/// let mut game = GameBuilder::new()
///     .board_size(30)
///     .jump(3, 22)
///     .jump(27, 1)
///     .player("Alice")
///     .player("Bob")
///     .build(42)
///     .unwrap();
///
/// let result = game.play().unwrap();
/// assert_eq!(result.position, 30);
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    board_size: u32,
    jumps: Vec<(u32, u32)>,
    players: Vec<String>,
    dice_count: u32,
    dice_faces: u32,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            board_size: 100,
            jumps: Vec::new(),
            players: Vec::new(),
            dice_count: 1,
            dice_faces: 6,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board_size(mut self, size: u32) -> Self {
        self.board_size = size;
        self
    }

    /// Add a jump. Snake or ladder follows from the direction.
    pub fn jump(mut self, origin: u32, destination: u32) -> Self {
        self.jumps.push((origin, destination));
        self
    }

    /// Seat a player. Turn order follows call order.
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.players.push(name.into());
        self
    }

    pub fn players<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.players.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn dice(mut self, count: u32, faces: u32) -> Self {
        self.dice_count = count;
        self.dice_faces = faces;
        self
    }

    /// Build with seeded production dice.
    ///
    /// # Errors
    ///
    /// Any invalid board, jump, dice or player setting.
    pub fn build(self, seed: u64) -> Result<Game<GameRng>> {
        info!(seed, "seeding dice");
        self.build_with_source(GameRng::new(seed))
    }

    /// Build with a caller-supplied randomness source.
    ///
    /// # Errors
    ///
    /// Any invalid board, jump, dice or player setting.
    pub fn build_with_source<S: RollSource>(self, source: S) -> Result<Game<S>> {
        let mut board = Board::new(self.board_size)?;
        for (origin, destination) in self.jumps {
            board.register_jump(origin, destination)?;
        }

        let dice = Dice::new(self.dice_count, self.dice_faces, source)?;
        let players = self.players.into_iter().map(Player::new).collect();

        info!(
            size = board.size(),
            snakes = board.snake_count(),
            ladders = board.ladder_count(),
            dice = %dice,
            "board ready"
        );

        Game::new(board, dice, players)
    }
}
