use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// Canonical movement directions, one unit vector each.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit-vector offset for this direction.
    ///
    /// Up is (0, -1): the grid's y axis grows downward.
    #[must_use]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Quit,
}

/// Polls the terminal for at most one input event per frame.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the next pending input, or `None` when no key is waiting.
    ///
    /// Non-blocking: uses a zero-duration poll so the render loop keeps
    /// its frame cadence regardless of input activity.
    pub fn poll_input(&mut self) -> io::Result<Option<GameInput>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }

        let Event::Key(key) = event::read()? else {
            return Ok(None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(None);
        }

        let input = match key.code {
            KeyCode::Up | KeyCode::Char('w') => Some(GameInput::Direction(Direction::Up)),
            KeyCode::Down | KeyCode::Char('s') => Some(GameInput::Direction(Direction::Down)),
            KeyCode::Left | KeyCode::Char('a') => Some(GameInput::Direction(Direction::Left)),
            KeyCode::Right | KeyCode::Char('d') => Some(GameInput::Direction(Direction::Right)),
            KeyCode::Char('q') | KeyCode::Esc => Some(GameInput::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(GameInput::Quit)
            }
            _ => None,
        };

        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::Direction;

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn offsets_are_unit_vectors() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let (dx, dy) = direction.offset();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }
}
