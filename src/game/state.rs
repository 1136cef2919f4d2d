use super::food::Food;
use super::grid::Position;
use super::snake::Snake;

/// What the snake ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Head landed on the wall ring
    Wall,
    /// Head landed on the snake's own body
    Body,
}

/// Complete state of one running game.
///
/// Owned exclusively by the play loop; the renderer only ever sees the
/// snapshots produced from it.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub board_width: i32,
    pub board_height: i32,
    /// Equals the snake's target length; starts at the initial length
    pub score: u32,
    pub game_over: bool,
}

impl GameState {
    pub fn new(snake: Snake, food: Food, board_width: i32, board_height: i32) -> Self {
        let score = snake.len() as u32;
        Self {
            snake,
            food,
            board_width,
            board_height,
            score,
            game_over: false,
        }
    }

    /// The per-tick view handed to the renderer
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            snake_segments: self.snake.segments().to_vec(),
            food: self.food.position(),
            board_width: self.board_width,
            board_height: self.board_height,
            score: self.score,
            game_over: self.game_over,
        }
    }
}

/// Render view of the board at one tick. Segments are ordered head first.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub snake_segments: Vec<Position>,
    pub food: Position,
    pub board_width: i32,
    pub board_height: i32,
    pub score: u32,
    pub game_over: bool,
}
