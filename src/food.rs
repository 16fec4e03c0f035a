use rand::Rng;

use crate::snake::{Position, Snake};

/// Food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates a food at `position`.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Spawns food in a cell not occupied by the snake.
    ///
    /// Returns `None` when the snake covers the whole board.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, grid_size: u16, snake: &Snake) -> Option<Self> {
        place_avoiding(rng, grid_size, snake).map(Self::at)
    }
}

/// Draws a cell with both coordinates uniform over `[0, grid_size - 1]`.
#[must_use]
pub fn generate_random_cell<R: Rng + ?Sized>(rng: &mut R, grid_size: u16) -> Position {
    Position {
        x: rng.gen_range(0..i32::from(grid_size)),
        y: rng.gen_range(0..i32::from(grid_size)),
    }
}

/// Resamples until the cell is free of the snake.
///
/// Expected O(1) draws at normal occupancy. The grid-full case would never
/// terminate, so it is detected up front and reported as `None`; the caller
/// treats it as a terminal board-full condition.
#[must_use]
pub fn place_avoiding<R: Rng + ?Sized>(
    rng: &mut R,
    grid_size: u16,
    snake: &Snake,
) -> Option<Position> {
    let total_cells = usize::from(grid_size) * usize::from(grid_size);
    if snake.len() >= total_cells {
        return None;
    }

    loop {
        let candidate = generate_random_cell(rng, grid_size);
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }
}
