//! Board layout and jump effects.
//!
//! - `JumpEffect`: a snake or ladder, kind derived from its direction
//! - `Board`: cells `0..=size`, each holding at most one jump

mod board;
pub mod jump;

pub use board::{Board, Cell};
pub use jump::{JumpEffect, JumpKind};
