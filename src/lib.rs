//! Grid Snake - a terminal Snake game built around a pure game engine
//!
//! This library provides:
//! - Core game logic with no I/O (game module)
//! - End-of-game result records (record module)
//! - Keyboard mapping (input module) and TUI rendering (render module)
//! - The interactive host loop (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod modes;
pub mod record;
pub mod render;
