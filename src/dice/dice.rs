//! Dice: `count` dice with `faces` sides each, summed.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{ConfigError, GameRng};

use super::source::RollSource;

/// The faces shown by one throw.
///
/// SmallVec keeps the common 1-4 dice case off the heap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roll {
    faces: SmallVec<[u32; 4]>,
}

impl Roll {
    /// Build a roll from individual die faces.
    pub fn from_faces(faces: impl IntoIterator<Item = u32>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
        }
    }

    /// Each die, in throw order.
    #[must_use]
    pub fn faces(&self) -> &[u32] {
        &self.faces
    }

    /// Sum of all faces.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.faces.iter().fold(0u32, |sum, face| sum.saturating_add(*face))
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.faces.len() <= 1 {
            return write!(f, "{}", self.total());
        }

        for (i, face) in self.faces.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{face}")?;
        }
        write!(f, " = {}", self.total())
    }
}

/// A set of identical dice bound to a randomness source.
///
/// ```
/// use snakes_ladders::dice::{Dice, FixedRolls};
///
/// let mut dice = Dice::new(2, 6, FixedRolls::new([3, 5])).unwrap();
/// assert_eq!(dice.roll(), 8);
/// ```
#[derive(Clone, Debug)]
pub struct Dice<S = GameRng> {
    count: u32,
    faces: u32,
    source: S,
}

impl<S: RollSource> Dice<S> {
    /// Create dice.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NoDice`] or [`ConfigError::NoFaces`] when either
    /// parameter is 0.
    pub fn new(count: u32, faces: u32, source: S) -> Result<Self, ConfigError> {
        if count == 0 {
            return Err(ConfigError::NoDice);
        }
        if faces == 0 {
            return Err(ConfigError::NoFaces);
        }

        Ok(Self {
            count,
            faces,
            source,
        })
    }

    /// Throw all dice and return the sum, in `min()..=max()`.
    pub fn roll(&mut self) -> u32 {
        self.roll_detailed().total()
    }

    /// Throw all dice and keep each face.
    pub fn roll_detailed(&mut self) -> Roll {
        let faces = self.faces;
        let roll = Roll::from_faces((0..self.count).map(|_| self.source.roll_die(faces)));
        trace!(faces = ?roll.faces(), total = roll.total(), "dice rolled");
        roll
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[must_use]
    pub fn faces(&self) -> u32 {
        self.faces
    }

    /// Smallest possible total.
    #[must_use]
    pub fn min(&self) -> u32 {
        self.count
    }

    /// Largest possible total.
    #[must_use]
    pub fn max(&self) -> u32 {
        self.count.saturating_mul(self.faces)
    }

    /// The randomness source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S> std::fmt::Display for Dice<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::FixedRolls;

    #[test]
    fn test_rejects_zero_count() {
        assert_eq!(
            Dice::new(0, 6, FixedRolls::always(1)).unwrap_err(),
            ConfigError::NoDice
        );
    }

    #[test]
    fn test_rejects_zero_faces() {
        assert_eq!(
            Dice::new(1, 0, FixedRolls::always(1)).unwrap_err(),
            ConfigError::NoFaces
        );
    }

    #[test]
    fn test_sum_of_scripted_faces() {
        let mut dice = Dice::new(3, 6, FixedRolls::new([1, 4, 6])).unwrap();
        let roll = dice.roll_detailed();

        assert_eq!(roll.faces(), &[1, 4, 6]);
        assert_eq!(roll.total(), 11);
        assert_eq!(dice.source().rolls_made(), 3);
    }

    #[test]
    fn test_seeded_rolls_stay_in_range() {
        let mut dice = Dice::new(2, 6, GameRng::new(42)).unwrap();
        assert_eq!(dice.min(), 2);
        assert_eq!(dice.max(), 12);

        for _ in 0..500 {
            let total = dice.roll();
            assert!((2..=12).contains(&total));
        }
    }

    #[test]
    fn test_seeded_dice_repeat() {
        let mut a = Dice::new(1, 6, GameRng::new(9)).unwrap();
        let mut b = Dice::new(1, 6, GameRng::new(9)).unwrap();

        let seq_a: Vec<_> = (0..20).map(|_| a.roll()).collect();
        let seq_b: Vec<_> = (0..20).map(|_| b.roll()).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn test_one_faced_die() {
        let mut dice = Dice::new(4, 1, GameRng::new(0)).unwrap();
        assert_eq!(dice.roll(), 4);
    }

    #[test]
    fn test_roll_display() {
        assert_eq!(Roll::from_faces([5]).to_string(), "5");
        assert_eq!(Roll::from_faces([3, 5]).to_string(), "3 + 5 = 8");
    }

    #[test]
    fn test_dice_display() {
        let dice = Dice::new(2, 6, FixedRolls::always(1)).unwrap();
        assert_eq!(dice.to_string(), "2d6");
    }
}
