//! Classic Snake for the terminal
//!
//! This library splits into a pure simulation core and thin terminal
//! collaborators:
//! - Core game logic (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - Per-session statistics (metrics module)
//! - The interactive play loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
