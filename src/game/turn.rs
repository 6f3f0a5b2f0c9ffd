//! What a turn produces: the phase machine, per-turn records, and the
//! final result.

use serde::Serialize;

use crate::board::JumpEffect;
use crate::core::PlayerId;
use crate::dice::Roll;

/// Game lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum GamePhase {
    /// Set up, no turn taken yet.
    #[default]
    NotStarted,
    /// Turns are being played.
    TurnInProgress,
    /// A player landed exactly on the goal. Terminal.
    Finished,
}

/// How a turn resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TurnOutcome {
    /// The roll would pass the goal; the player stays put.
    Overshoot,
    /// Plain move onto a cell without a jump.
    Moved,
    /// The player landed on a jump and was relocated.
    Jumped(JumpEffect),
}

/// One completed turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TurnRecord {
    /// Turn number across all players, starting at 1.
    pub turn: u64,
    pub player: PlayerId,
    pub name: String,
    pub roll: Roll,
    /// Position before the roll.
    pub from: u32,
    pub outcome: TurnOutcome,
    /// Position after the move and any jump.
    pub position: u32,
    /// The player reached the goal this turn.
    pub won: bool,
}

impl TurnRecord {
    /// The jump taken this turn, if any.
    #[must_use]
    pub fn jump(&self) -> Option<&JumpEffect> {
        match &self.outcome {
            TurnOutcome::Jumped(jump) => Some(jump),
            _ => None,
        }
    }

    #[must_use]
    pub fn overshot(&self) -> bool {
        self.outcome == TurnOutcome::Overshoot
    }
}

impl std::fmt::Display for TurnRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} rolled a {}", self.name, self.roll)?;
        match &self.outcome {
            TurnOutcome::Overshoot => write!(f, " but overshot! Stays at {}", self.position),
            TurnOutcome::Moved => write!(f, ". Now at: {}", self.position),
            TurnOutcome::Jumped(jump) => write!(f, ". {jump}. Now at: {}", self.position),
        }
    }
}

/// Outcome of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: PlayerId,
    pub name: String,
    /// Always the win score.
    pub position: u32,
    /// Total turns played, all players included.
    pub turns: u64,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "*** {} WINS THE GAME! ***", self.name)
    }
}
