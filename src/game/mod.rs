//! The game loop and its setup.
//!
//! - `GameBuilder`: validates a layout and seats the players
//! - `Game`: FIFO turn rotation, overshoot, jumps, exact-landing win
//! - `TurnRecord` / `GameResult`: what the loop reports

mod builder;
mod game;
mod turn;

pub use builder::GameBuilder;
pub use game::Game;
pub use turn::{GamePhase, GameResult, TurnOutcome, TurnRecord};
