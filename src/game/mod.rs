//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Hosts drive it through [`GameEngine`] and draw from [`GameSnapshot`].

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod snapshot;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::GameConfig;
pub use engine::GameEngine;
pub use error::GameError;
pub use snapshot::GameSnapshot;
pub use state::{EndReason, GameStatus, Position, Snake};
