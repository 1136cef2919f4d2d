use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// Configuration for one game instance. Immutable once the engine is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board width in cells, wall ring included
    pub board_width: i32,
    /// Board height in cells, wall ring included
    pub board_height: i32,
    /// Length of the snake at game start
    pub initial_snake_length: usize,
    /// Milliseconds between simulation ticks
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 32,
            board_height: 16,
            initial_snake_length: 5,
            tick_interval_ms: 500,
        }
    }
}

impl GameConfig {
    /// Configuration with a custom board size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            board_width: width,
            board_height: height,
            ..Default::default()
        }
    }

    /// Small board for tests
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Reject configurations that cannot produce a well-formed starting
    /// state: the interior must hold the centered snake and a food cell.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.board_width >= 4 && self.board_height >= 4,
            "board {}x{} leaves no interior inside the walls; minimum is 4x4",
            self.board_width,
            self.board_height
        );
        ensure!(
            self.initial_snake_length >= 1,
            "initial snake length must be at least 1"
        );
        ensure!(self.tick_interval_ms > 0, "tick interval must be positive");

        // The snake spawns at the center heading right, body trailing left;
        // its tail must stay off the left wall.
        let center_x = self.board_width / 2;
        let tail_x = center_x - (self.initial_snake_length as i32 - 1);
        ensure!(
            tail_x >= 1,
            "initial snake of length {} does not fit on a board {} cells wide",
            self.initial_snake_length,
            self.board_width
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_width, 32);
        assert_eq!(config.board_height, 16);
        assert_eq!(config.initial_snake_length, 5);
        assert_eq!(config.tick_interval_ms, 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_size() {
        let config = GameConfig::new(20, 12);
        assert_eq!(config.board_width, 20);
        assert_eq!(config.board_height, 12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_tiny_board() {
        assert!(GameConfig::new(3, 10).validate().is_err());
        assert!(GameConfig::new(10, 3).validate().is_err());
    }

    #[test]
    fn test_rejects_snake_that_does_not_fit() {
        // On a 10-wide board the center is x=5; a length-5 body reaches
        // back to x=1, just clear of the wall.
        let config = GameConfig {
            initial_snake_length: 5,
            ..GameConfig::small()
        };
        assert!(config.validate().is_ok());

        let config = GameConfig {
            initial_snake_length: 6,
            ..GameConfig::small()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_degenerate_values() {
        let config = GameConfig {
            initial_snake_length: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            tick_interval_ms: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
