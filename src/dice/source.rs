//! Randomness sources for [`Dice`](super::Dice).
//!
//! Dice never reach for a global generator. Whatever produces the faces is
//! handed in at construction:
//!
//! - [`GameRng`]: seeded ChaCha8, used in production
//! - [`FixedRolls`]: replays a scripted sequence, used by tests and demos

use crate::core::GameRng;

/// Something that can roll a single die.
pub trait RollSource {
    /// Roll one die with `faces` sides. Must return a value in `1..=faces`.
    fn roll_die(&mut self, faces: u32) -> u32;
}

impl RollSource for GameRng {
    fn roll_die(&mut self, faces: u32) -> u32 {
        self.gen_range(1..=faces)
    }
}

impl<R: RollSource + ?Sized> RollSource for &mut R {
    fn roll_die(&mut self, faces: u32) -> u32 {
        (**self).roll_die(faces)
    }
}

impl<R: RollSource + ?Sized> RollSource for Box<R> {
    fn roll_die(&mut self, faces: u32) -> u32 {
        (**self).roll_die(faces)
    }
}

/// Scripted die faces, repeated from the start once exhausted.
///
/// Values are clamped into `1..=faces` at roll time. An empty script
/// always rolls 1.
///
/// ```
/// use snakes_ladders::dice::{FixedRolls, RollSource};
///
/// let mut script = FixedRolls::new([6, 2]);
/// assert_eq!(script.roll_die(6), 6);
/// assert_eq!(script.roll_die(6), 2);
/// assert_eq!(script.roll_die(6), 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedRolls {
    values: Vec<u32>,
    next: usize,
}

impl FixedRolls {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }

    /// Roll the same value forever.
    #[must_use]
    pub fn always(value: u32) -> Self {
        Self::new(vec![value])
    }

    /// Number of dice rolled so far.
    #[must_use]
    pub fn rolls_made(&self) -> usize {
        self.next
    }
}

impl RollSource for FixedRolls {
    fn roll_die(&mut self, faces: u32) -> u32 {
        let value = if self.values.is_empty() {
            1
        } else {
            self.values[self.next % self.values.len()]
        };
        self.next += 1;
        value.clamp(1, faces.max(1))
    }
}
