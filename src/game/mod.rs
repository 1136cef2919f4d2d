//! Core game logic for Snake
//!
//! Everything in here is pure simulation with no I/O or rendering
//! dependencies; tests drive it by calling [`GameEngine::tick`] directly.

pub mod config;
pub mod engine;
pub mod food;
pub mod grid;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use engine::{GameEngine, TickResult};
pub use food::Food;
pub use grid::{Direction, Position};
pub use snake::Snake;
pub use state::{CollisionKind, GameSnapshot, GameState};
