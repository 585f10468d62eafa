use serde::{Deserialize, Serialize};

use super::state::{EndReason, GameStatus, Position};

/// An owned copy of everything a renderer needs for one frame.
///
/// Holds no references into the engine, so the engine can keep ticking while a
/// frame built from an older snapshot is still on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub grid_width: usize,
    pub grid_height: usize,
    /// Snake segments, head first
    pub segments: Vec<Position>,
    /// `None` only after the board filled up
    pub food: Option<Position>,
    pub status: GameStatus,
    pub end_reason: Option<EndReason>,
    pub score: usize,
    pub ticks: u64,
}

impl GameSnapshot {
    pub fn head(&self) -> Position {
        self.segments[0]
    }

    /// Snake length, counting a freshly appended tail copy
    pub fn snake_len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }
}
