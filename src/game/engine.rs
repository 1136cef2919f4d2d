use anyhow::Result;
use rand::rngs::ThreadRng;

use super::config::GameConfig;
use super::food::Food;
use super::grid::{Direction, Position};
use super::snake::Snake;
use super::state::{CollisionKind, GameState};

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// The head landed on the food this tick
    pub ate_food: bool,
    /// Set when this tick ended the game
    pub collision: Option<CollisionKind>,
    /// Whether the game is over after this tick
    pub game_over: bool,
}

/// Drives the simulation. Owns the validated configuration and the RNG
/// used for food placement.
pub struct GameEngine {
    config: GameConfig,
    rng: ThreadRng,
}

impl GameEngine {
    /// Fails if the configured board cannot hold the starting snake and
    /// an interior food cell.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: rand::thread_rng(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the starting state: a straight snake heading right from the
    /// board center, and one food pellet.
    pub fn reset(&mut self) -> GameState {
        let width = self.config.board_width;
        let height = self.config.board_height;

        let head = Position::new(width / 2, height / 2);
        let snake = Snake::new(head, Direction::Right, self.config.initial_snake_length);
        let food = Food::spawn(&mut self.rng, width, height);

        GameState::new(snake, food, width, height)
    }

    /// Advance the simulation by one tick.
    ///
    /// Order is fixed: steering applies first, then the snake moves, then
    /// food consumption, then collision checks against the moved head.
    /// Growth from eating takes effect on the next tick's advance.
    pub fn tick(&mut self, state: &mut GameState, steer: Option<Direction>) -> TickResult {
        if state.game_over {
            return TickResult {
                ate_food: false,
                collision: None,
                game_over: true,
            };
        }

        if let Some(direction) = steer {
            state.snake.steer(direction);
        }

        state.snake.advance();

        let ate_food = state.snake.head() == state.food.position();
        if ate_food {
            state.snake.grow();
            state.score += 1;
            state
                .food
                .respawn(&mut self.rng, state.board_width, state.board_height);
        }

        let collision = self.check_collision(state);
        if collision.is_some() {
            state.game_over = true;
        }

        TickResult {
            ate_food,
            collision,
            game_over: state.game_over,
        }
    }

    fn check_collision(&self, state: &GameState) -> Option<CollisionKind> {
        if state
            .snake
            .wall_collided(state.board_width, state.board_height)
        {
            Some(CollisionKind::Wall)
        } else if state.snake.self_collided() {
            Some(CollisionKind::Body)
        } else {
            None
        }
    }
}
