//! Jump effects: snakes and ladders.
//!
//! A jump is a pair of cells. Its kind is not chosen by the caller, it is
//! read off the direction of travel:
//!
//! ```
//! use snakes_ladders::board::{JumpEffect, JumpKind};
//!
//! assert_eq!(JumpEffect::new(14, 4).kind(), JumpKind::Snake);
//! assert_eq!(JumpEffect::new(3, 30).kind(), JumpKind::Ladder);
//! ```

use serde::{Deserialize, Serialize};

/// Direction of a jump.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JumpKind {
    /// Moves the player backward.
    Snake,
    /// Moves the player forward.
    Ladder,
}

impl std::fmt::Display for JumpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JumpKind::Snake => write!(f, "snake"),
            JumpKind::Ladder => write!(f, "ladder"),
        }
    }
}

/// A displacement from `origin` to `destination`.
///
/// Construction is infallible. Whether the pair makes sense on a given
/// board is checked by [`Board::register_jump`](super::Board::register_jump).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JumpEffect {
    origin: u32,
    destination: u32,
}

impl JumpEffect {
    /// Create a jump between two cells.
    #[must_use]
    pub const fn new(origin: u32, destination: u32) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// Cell that triggers the jump.
    #[must_use]
    pub const fn origin(&self) -> u32 {
        self.origin
    }

    /// Cell the player ends up on.
    #[must_use]
    pub const fn destination(&self) -> u32 {
        self.destination
    }

    /// Snake if the jump goes down, ladder otherwise.
    #[must_use]
    pub const fn kind(&self) -> JumpKind {
        if self.destination < self.origin {
            JumpKind::Snake
        } else {
            JumpKind::Ladder
        }
    }

    /// Whether the jump goes down.
    #[must_use]
    pub const fn is_snake(&self) -> bool {
        matches!(self.kind(), JumpKind::Snake)
    }

    /// Whether the jump goes up.
    #[must_use]
    pub const fn is_ladder(&self) -> bool {
        matches!(self.kind(), JumpKind::Ladder)
    }

    /// Signed number of cells travelled.
    #[must_use]
    pub fn displacement(&self) -> i64 {
        i64::from(self.destination) - i64::from(self.origin)
    }
}

impl std::fmt::Display for JumpEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind() {
            JumpKind::Snake => write!(
                f,
                "[SNAKE] Bitten at {}! Sliding down to {}",
                self.origin, self.destination
            ),
            JumpKind::Ladder => write!(
                f,
                "[LADDER] Climbed at {}! Going up to {}",
                self.origin, self.destination
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_is_derived() {
        let snake = JumpEffect::new(99, 10);
        assert_eq!(snake.kind(), JumpKind::Snake);
        assert!(snake.is_snake());
        assert!(!snake.is_ladder());

        let ladder = JumpEffect::new(50, 95);
        assert_eq!(ladder.kind(), JumpKind::Ladder);
        assert!(ladder.is_ladder());
    }

    #[test]
    fn test_accessors() {
        let jump = JumpEffect::new(5, 2);
        assert_eq!(jump.origin(), 5);
        assert_eq!(jump.destination(), 2);
        assert_eq!(jump.displacement(), -3);
        assert_eq!(JumpEffect::new(8, 10).displacement(), 2);
    }

    #[test]
    fn test_description() {
        assert_eq!(
            JumpEffect::new(14, 4).to_string(),
            "[SNAKE] Bitten at 14! Sliding down to 4"
        );
        assert_eq!(
            JumpEffect::new(3, 30).to_string(),
            "[LADDER] Climbed at 3! Going up to 30"
        );
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(JumpKind::Snake.to_string(), "snake");
        assert_eq!(JumpKind::Ladder.to_string(), "ladder");
    }
}
