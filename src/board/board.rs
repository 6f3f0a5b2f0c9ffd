//! The board: an owned vector of cells indexed by cell number.
//!
//! Cell 0 is the start square and cell `size` is the goal. Jumps can only
//! start strictly between the two: landing on the goal wins, and nothing
//! ever moves onto the start square by rolling.

use serde::Serialize;
use tracing::debug;

use crate::core::{ConfigError, GameError};

use super::jump::JumpEffect;

/// One square of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Cell {
    index: u32,
    effect: Option<JumpEffect>,
}

impl Cell {
    fn new(index: u32) -> Self {
        Self {
            index,
            effect: None,
        }
    }

    /// Cell number.
    #[must_use]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Jump starting on this cell, if any.
    #[must_use]
    pub fn effect(&self) -> Option<&JumpEffect> {
        self.effect.as_ref()
    }

    /// Whether a jump starts on this cell.
    #[must_use]
    pub fn has_jump(&self) -> bool {
        self.effect.is_some()
    }
}

/// A fixed-size track of `size + 1` cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Board {
    size: u32,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board whose goal is cell `size`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::BoardTooSmall`] if `size` is 0.
    pub fn new(size: u32) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::BoardTooSmall(size));
        }

        let cells = (0..=size).map(Cell::new).collect();
        Ok(Self { size, cells })
    }

    /// Goal cell, which is also the win score.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Place a jump on `origin`.
    ///
    /// The board is untouched when this returns an error.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::OriginOutOfBounds`] unless `1 <= origin <= size - 1`
    /// - [`ConfigError::DestinationOutOfBounds`] if `destination > size`
    /// - [`ConfigError::DegenerateJump`] if `origin == destination`
    /// - [`ConfigError::DuplicateJump`] if `origin` already holds a jump
    pub fn register_jump(&mut self, origin: u32, destination: u32) -> Result<&JumpEffect, ConfigError> {
        let size = self.size;

        if origin == 0 || origin >= size {
            return Err(ConfigError::OriginOutOfBounds { origin, size });
        }
        if destination > size {
            return Err(ConfigError::DestinationOutOfBounds { destination, size });
        }
        if origin == destination {
            return Err(ConfigError::DegenerateJump(origin));
        }

        let cell = &mut self.cells[origin as usize];
        if let Some(existing) = cell.effect {
            return Err(ConfigError::DuplicateJump { origin, existing });
        }

        let jump = &*cell.effect.insert(JumpEffect::new(origin, destination));
        debug!(origin, destination, kind = %jump.kind(), "registered jump");
        Ok(jump)
    }

    /// Look up a cell.
    ///
    /// # Errors
    ///
    /// [`GameError::OutOfRange`] if `position > size`.
    pub fn cell_at(&self, position: u32) -> Result<&Cell, GameError> {
        self.cells
            .get(position as usize)
            .ok_or(GameError::OutOfRange {
                position,
                size: self.size,
            })
    }

    /// Jump starting on `position`. `None` for plain or off-board cells.
    #[must_use]
    pub fn effect_at(&self, position: u32) -> Option<&JumpEffect> {
        self.cells.get(position as usize).and_then(Cell::effect)
    }

    /// All cells, start square first.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Registered jumps in cell order.
    pub fn jumps(&self) -> impl Iterator<Item = &JumpEffect> {
        self.cells.iter().filter_map(Cell::effect)
    }

    /// Number of registered snakes.
    #[must_use]
    pub fn snake_count(&self) -> usize {
        self.jumps().filter(|jump| jump.is_snake()).count()
    }

    /// Number of registered ladders.
    #[must_use]
    pub fn ladder_count(&self) -> usize {
        self.jumps().filter(|jump| jump.is_ladder()).count()
    }
}
