use rand::Rng;

use super::grid::Position;

/// The food pellet: a single cell strictly inside the wall ring.
///
/// Respawns are drawn uniformly over the interior and are not filtered
/// against the snake body. A pellet that lands under the snake becomes
/// reachable as soon as the snake moves off the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Position,
}

impl Food {
    /// Spawn at a fresh random interior cell of a `width` x `height` board.
    pub fn spawn<R: Rng>(rng: &mut R, width: i32, height: i32) -> Self {
        let mut food = Self {
            position: Position::new(1, 1),
        };
        food.respawn(rng, width, height);
        food
    }

    /// Place at a fixed cell. Intended for deterministic test setups.
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Relocate to a uniformly random cell with x in [1, width-2] and
    /// y in [1, height-2].
    pub fn respawn<R: Rng>(&mut self, rng: &mut R, width: i32, height: i32) {
        self.position = Position::new(rng.gen_range(1..width - 1), rng.gen_range(1..height - 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_respawn_stays_interior() {
        let mut rng = rand::thread_rng();
        let mut food = Food::spawn(&mut rng, 10, 6);

        for _ in 0..500 {
            food.respawn(&mut rng, 10, 6);
            let pos = food.position();
            assert!((1..=8).contains(&pos.x), "x {} escaped interior", pos.x);
            assert!((1..=4).contains(&pos.y), "y {} escaped interior", pos.y);
        }
    }

    #[test]
    fn test_respawn_on_smallest_board() {
        // 4x4 leaves a 2x2 interior
        let mut rng = rand::thread_rng();
        let mut food = Food::spawn(&mut rng, 4, 4);

        for _ in 0..50 {
            food.respawn(&mut rng, 4, 4);
            let pos = food.position();
            assert!((1..=2).contains(&pos.x));
            assert!((1..=2).contains(&pos.y));
        }
    }

    #[test]
    fn test_fixed_placement() {
        let food = Food::at(Position::new(3, 4));
        assert_eq!(food.position(), Position::new(3, 4));
    }
}
