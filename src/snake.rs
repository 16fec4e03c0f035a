use std::collections::VecDeque;

use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the square grid.
    #[must_use]
    pub fn is_within_bounds(self, grid_size: u16) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < i32::from(grid_size) && self.y < i32::from(grid_size)
    }

    /// Returns the neighboring position one step in `direction`.
    ///
    /// No clamping: the result may lie outside the grid, which is how edge
    /// collisions are detected after a move.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Canonical starting segments, head first.
fn starting_segments() -> VecDeque<Position> {
    VecDeque::from([
        Position { x: 6, y: 9 },
        Position { x: 5, y: 9 },
        Position { x: 4, y: 9 },
    ])
}

/// Direction the starting body faces.
pub const STARTING_DIRECTION: Direction = Direction::Right;

/// Ordered snake body, front = head, back = tail.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a snake in the canonical 3-segment starting configuration.
    #[must_use]
    pub fn starting() -> Self {
        Self {
            body: starting_segments(),
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        debug_assert!(!segments.is_empty());
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Applies one movement step: pushes the new head, drops the tail
    /// unless `grow` retains it this tick.
    ///
    /// Purely geometric — no bounds or overlap checking happens here.
    /// Interpreting the new head position is the caller's job.
    pub fn advance(&mut self, direction: Direction, grow: bool) {
        let next_head = self.head().stepped(direction);
        self.body.push_front(next_head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Restores the canonical starting configuration.
    pub fn reset(&mut self) {
        self.body = starting_segments();
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments. Unreachable in practice,
    /// provided for completeness alongside `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::input::Direction;

    use super::{Position, Snake, STARTING_DIRECTION};

    #[test]
    fn starting_body_is_three_adjacent_segments() {
        let snake = Snake::starting();

        let segments: Vec<_> = snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![
                Position { x: 6, y: 9 },
                Position { x: 5, y: 9 },
                Position { x: 4, y: 9 },
            ]
        );
        assert_eq!(STARTING_DIRECTION, Direction::Right);
    }

    #[test]
    fn advance_without_growth_keeps_length() {
        let mut snake = Snake::starting();

        snake.advance(Direction::Right, false);

        assert_eq!(snake.head(), Position { x: 7, y: 9 });
        assert_eq!(snake.len(), 3);
        assert!(!snake.occupies(Position { x: 4, y: 9 }));
    }

    #[test]
    fn advance_with_growth_retains_tail() {
        let mut snake = Snake::starting();

        snake.advance(Direction::Right, true);

        assert_eq!(snake.head(), Position { x: 7, y: 9 });
        assert_eq!(snake.len(), 4);
        assert!(snake.occupies(Position { x: 4, y: 9 }));
    }

    #[test]
    fn advance_does_not_clamp_at_grid_edges() {
        let mut snake = Snake::from_segments(vec![Position { x: 0, y: 0 }]);

        snake.advance(Direction::Left, false);

        assert_eq!(snake.head(), Position { x: -1, y: 0 });
        assert!(!snake.head().is_within_bounds(25));
    }

    #[test]
    fn reset_restores_starting_configuration() {
        let mut snake = Snake::starting();
        snake.advance(Direction::Right, true);
        snake.advance(Direction::Down, true);

        snake.reset();

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position { x: 6, y: 9 });
    }

    #[test]
    fn occupies_matches_exact_coordinates_only() {
        let snake = Snake::starting();

        assert!(snake.occupies(Position { x: 5, y: 9 }));
        assert!(!snake.occupies(Position { x: 5, y: 8 }));
        assert!(!snake.occupies(Position { x: 9, y: 5 }));
    }

    #[test]
    fn head_overlap_ignores_the_head_itself() {
        let snake = Snake::starting();
        assert!(!snake.head_overlaps_body());

        let overlapping = Snake::from_segments(vec![
            Position { x: 2, y: 2 },
            Position { x: 2, y: 3 },
            Position { x: 3, y: 3 },
            Position { x: 3, y: 2 },
            Position { x: 2, y: 2 },
        ]);
        assert!(overlapping.head_overlaps_body());
    }
}
