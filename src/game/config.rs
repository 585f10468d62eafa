use serde::{Deserialize, Serialize};

use super::{action::Direction, error::GameError, state::Position};

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Where the one-segment snake starts
    pub initial_head: Position,
    /// Direction the snake moves before any input
    pub initial_direction: Direction,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            initial_head: Position::new(5, 5),
            initial_direction: Direction::Right,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    pub fn with_head(mut self, head: Position, direction: Direction) -> Self {
        self.initial_head = head;
        self.initial_direction = direction;
        self
    }

    /// Check that the board can hold the snake plus one food cell and that the
    /// head starts on the board.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(GameError::InvalidConfiguration(format!(
                "board must be at least 1x1, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }
        if i32::try_from(self.grid_width).is_err() || i32::try_from(self.grid_height).is_err() {
            return Err(GameError::InvalidConfiguration(format!(
                "board {}x{} exceeds the coordinate range",
                self.grid_width, self.grid_height
            )));
        }
        match self.grid_width.checked_mul(self.grid_height) {
            Some(cells) if cells >= 2 => {}
            _ => {
                return Err(GameError::InvalidConfiguration(format!(
                    "board {}x{} has no room for food",
                    self.grid_width, self.grid_height
                )))
            }
        }
        if !self.in_bounds(self.initial_head) {
            return Err(GameError::InvalidConfiguration(format!(
                "initial head ({}, {}) is outside the {}x{} board",
                self.initial_head.x, self.initial_head.y, self.grid_width, self.grid_height
            )));
        }
        Ok(())
    }

    /// Check if a position is within the grid bounds
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && (pos.x as i64) < self.grid_width as i64
            && pos.y >= 0
            && (pos.y as i64) < self.grid_height as i64
    }
}
