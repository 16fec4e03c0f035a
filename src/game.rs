use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{ConfigError, GameConfig};
use crate::food::Food;
use crate::input::Direction;
use crate::snake::{Snake, STARTING_DIRECTION};

/// Complete mutable game state for one session.
///
/// Owns the snake, the food, the current direction, and the run flag.
/// Renderers read snapshots; the input layer requests mutation only
/// through [`GameState::set_direction`].
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    direction: Direction,
    running: bool,
    config: GameConfig,
    rng: StdRng,
}

impl GameState {
    /// Creates a running state with the canonical starting snake.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Result<Self, ConfigError> {
        let config = config.validate()?;
        let snake = Snake::starting();
        let food = Food::spawn(&mut rng, config.grid_size, &snake)
            .expect("a validated grid always has free cells for the starting snake");

        Ok(Self {
            snake,
            food,
            score: 0,
            direction: STARTING_DIRECTION,
            running: true,
            config,
            rng,
        })
    }

    /// Advances the simulation by one gameplay tick. No-op while the game
    /// is over; a valid direction input resumes it.
    ///
    /// One transactional step: the prospective head decides growth, the
    /// advance consumes it, and terminal conditions are evaluated against
    /// the post-move body in fixed order (food, edges, self).
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }

        let prospective = self.snake.head().stepped(self.direction);
        let grow = prospective == self.food.position;
        self.snake.advance(self.direction, grow);

        if grow {
            self.score += 1;
            match Food::spawn(&mut self.rng, self.config.grid_size, &self.snake) {
                Some(food) => self.food = food,
                // Board full: nowhere left to place food.
                None => {
                    self.game_over();
                    return;
                }
            }
        }

        if !self.snake.head().is_within_bounds(self.config.grid_size) {
            self.game_over();
            return;
        }

        if self.snake.head_overlaps_body() {
            self.game_over();
        }
    }

    /// Requests a direction change from the input layer.
    ///
    /// Exact reversals are silently rejected so the head can never turn
    /// back into the second segment. Any accepted direction restarts an
    /// ended game, serving as the "press a direction to play again"
    /// gesture.
    pub fn set_direction(&mut self, requested: Direction) {
        if requested == self.direction.opposite() {
            return;
        }

        self.direction = requested;
        self.running = true;
    }

    /// Hard reset into the game-over state. All in-progress state is
    /// discarded; the board is ready for the next run.
    fn game_over(&mut self) {
        self.running = false;
        self.score = 0;
        self.snake.reset();
        self.direction = STARTING_DIRECTION;
        self.food = Food::spawn(&mut self.rng, self.config.grid_size, &self.snake)
            .expect("a validated grid always has free cells for the starting snake");
    }

    /// Returns false once a terminal collision has ended the current run.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the direction the next tick will move in.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the configured square grid size.
    #[must_use]
    pub fn grid_size(&self) -> u16 {
        self.config.grid_size
    }
}
