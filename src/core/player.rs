//! Player identification and state.
//!
//! ## PlayerId
//!
//! Index into the game's player table. The turn-order queue holds these,
//! never the players themselves.
//!
//! ## Player
//!
//! A name and a board position. Only the game loop moves a player.

use serde::{Deserialize, Serialize};

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based and follow setup order: the first player
/// added is `PlayerId(0)` and takes the first turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use snakes_ladders::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(u8::MAX as usize + 1)).map(|i| PlayerId(i as u8))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A named token on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    position: u32,
}

impl Player {
    /// Create a player on the start square (position 0).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: 0,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current cell.
    #[must_use]
    pub fn position(&self) -> u32 {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: u32) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p1), "Player 1");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(4).collect();
        assert_eq!(players.len(), 4);
        assert_eq!(players[0], PlayerId::new(0));
        assert_eq!(players[3], PlayerId::new(3));
    }

    #[test]
    fn test_new_player_starts_at_zero() {
        let player = Player::new("Alice");
        assert_eq!(player.name(), "Alice");
        assert_eq!(player.position(), 0);
    }

    #[test]
    fn test_set_position() {
        let mut player = Player::new(String::from("Bob"));
        player.set_position(42);
        assert_eq!(player.position(), 42);
    }
}
