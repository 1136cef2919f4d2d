use super::grid::{Direction, Position};

/// The snake entity. Segments are ordered head first.
///
/// Growth is driven by a target length: `grow` raises the target, and the
/// next `advance` keeps the tail instead of trimming it.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    segments: Vec<Position>,
    direction: Direction,
    target_len: usize,
}

impl Snake {
    /// Lay out a straight body of `length` segments starting at `head` and
    /// trailing away from `direction`.
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut segments = Vec::with_capacity(length);
        let mut cell = head;
        for _ in 0..length {
            segments.push(cell);
            cell = cell.step(direction.opposite());
        }

        Self {
            segments,
            direction,
            target_len: length,
        }
    }

    pub fn head(&self) -> Position {
        self.segments[0]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn segments(&self) -> &[Position] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Length the body will settle at after the next advance
    pub fn target_len(&self) -> usize {
        self.target_len
    }

    /// Accept a steering request unless it reverses the current heading.
    /// A reversal would run the head straight into the segment behind it.
    pub fn steer(&mut self, requested: Direction) {
        if !requested.is_opposite(self.direction) {
            self.direction = requested;
        }
    }

    /// Mark the snake to keep its tail on the next advance.
    pub fn grow(&mut self) {
        self.target_len += 1;
    }

    /// Push a new head one cell along the current heading, trimming the
    /// tail if the body now exceeds the target length.
    pub fn advance(&mut self) {
        let new_head = self.head().step(self.direction);
        self.segments.insert(0, new_head);

        if self.segments.len() > self.target_len {
            self.segments.pop();
        }
    }

    /// Head overlaps some other segment. Only meaningful right after an
    /// advance, for the freshly moved head.
    pub fn self_collided(&self) -> bool {
        let head = self.head();
        self.segments[1..].contains(&head)
    }

    /// Head sits on the outermost ring of a `width` x `height` board.
    /// The ring is wall, not playable space.
    pub fn wall_collided(&self, width: i32, height: i32) -> bool {
        let head = self.head();
        head.x == 0 || head.x == width - 1 || head.y == 0 || head.y == height - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_line_layout() {
        let snake = Snake::new(Position::new(16, 8), Direction::Right, 5);

        assert_eq!(snake.len(), 5);
        assert_eq!(snake.target_len(), 5);
        assert_eq!(snake.head(), Position::new(16, 8));
        // Body trails leftward, away from the rightward heading
        assert_eq!(
            snake.segments(),
            &[
                Position::new(16, 8),
                Position::new(15, 8),
                Position::new(14, 8),
                Position::new(13, 8),
                Position::new(12, 8),
            ]
        );
    }

    #[test]
    fn test_advance_keeps_length() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        snake.advance();

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 5));
        assert_eq!(*snake.segments().last().unwrap(), Position::new(4, 5));
    }

    #[test]
    fn test_grow_defers_to_next_advance() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        snake.grow();
        // Growing alone does not resize the body
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.target_len(), 4);

        snake.advance();
        assert_eq!(snake.len(), 4);

        // Back to steady state: later advances trim again
        snake.advance();
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_steer_rejects_reversal() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        snake.steer(Direction::Left);
        assert_eq!(snake.direction(), Direction::Right);

        // Rejection is idempotent
        snake.steer(Direction::Left);
        assert_eq!(snake.direction(), Direction::Right);

        snake.steer(Direction::Up);
        assert_eq!(snake.direction(), Direction::Up);
        snake.steer(Direction::Down);
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn test_steer_then_advance_moves_one_axis() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        snake.steer(Direction::Down);
        snake.advance();

        assert_eq!(snake.head(), Position::new(5, 6));
    }

    #[test]
    fn test_self_collision() {
        // Box the snake into a 2x2 turn: with length 5 the head comes back
        // around onto its own body.
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 5);

        snake.steer(Direction::Down);
        snake.advance(); // head (5,6)
        snake.steer(Direction::Left);
        snake.advance(); // head (4,6)
        snake.steer(Direction::Up);
        snake.advance(); // head (4,5), occupied by the body

        assert!(snake.self_collided());
    }

    #[test]
    fn test_no_self_collision_straight() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 5);
        snake.advance();
        assert!(!snake.self_collided());
    }

    #[test]
    fn test_wall_ring_collision() {
        let on_ring = [
            Position::new(0, 5),
            Position::new(9, 5),
            Position::new(5, 0),
            Position::new(5, 9),
        ];
        for head in on_ring {
            let snake = Snake::new(head, Direction::Right, 1);
            assert!(snake.wall_collided(10, 10), "head {head:?} should hit wall");
        }

        let interior = [Position::new(1, 1), Position::new(8, 8), Position::new(5, 5)];
        for head in interior {
            let snake = Snake::new(head, Direction::Right, 1);
            assert!(!snake.wall_collided(10, 10), "head {head:?} is interior");
        }
    }
}
