//! Dice and the randomness they draw from.
//!
//! The source is injected so that production runs use a seeded generator
//! while tests script exact faces.

mod dice;
pub mod source;

pub use dice::{Dice, Roll};
pub use source::{FixedRolls, RollSource};
