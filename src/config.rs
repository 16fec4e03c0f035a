use std::time::Duration;

use ratatui::style::Color;
use ratatui::symbols::border;
use thiserror::Error;

/// Default grid size (the board is always square).
pub const DEFAULT_GRID_SIZE: u16 = 25;

/// Default tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;

/// Smallest grid that still contains the canonical starting body,
/// whose head sits at (6, 9).
pub const MIN_GRID_SIZE: u16 = 10;

/// Runtime configuration for one game session.
///
/// Replaces the process-wide mutable globals of the classic layout so that
/// tests can instantiate independent grids of any valid size.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    /// Number of cells along each axis of the square grid.
    pub grid_size: u16,
    /// Wall-clock interval between gameplay ticks.
    pub tick_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
        }
    }
}

impl GameConfig {
    /// Validates the configuration, failing fast on values that would
    /// break the game mid-session.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        if self.grid_size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall {
                grid_size: self.grid_size,
            });
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(self)
    }
}

/// Malformed configuration detected at startup.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    #[error("grid size must be positive")]
    ZeroGridSize,
    #[error("grid size {grid_size} cannot contain the starting snake (minimum {MIN_GRID_SIZE})")]
    GridTooSmall { grid_size: u16 },
    #[error("tick interval must be positive")]
    ZeroTickInterval,
}

/// Retro palette: green board, dark-green snake.
#[derive(Debug)]
pub struct Theme {
    pub board_bg: Color,
    pub snake_body: Color,
    pub snake_head: Color,
    pub food: Color,
    pub score_fg: Color,
    pub overlay_fg: Color,
}

/// Half-block border set, solid face toward the play area: `▄` along the
/// top, `▀` along the bottom, full blocks on the sides.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

pub const THEME_RETRO: Theme = Theme {
    board_bg: Color::Rgb(173, 204, 96),
    snake_body: Color::Rgb(43, 51, 24),
    snake_head: Color::Rgb(43, 51, 24),
    food: Color::Rgb(180, 40, 30),
    score_fg: Color::Rgb(43, 51, 24),
    overlay_fg: Color::White,
};

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{ConfigError, GameConfig, DEFAULT_GRID_SIZE};

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(config));
        assert_eq!(config.grid_size, DEFAULT_GRID_SIZE);
    }

    #[test]
    fn zero_grid_size_is_rejected() {
        let config = GameConfig {
            grid_size: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroGridSize));
    }

    #[test]
    fn grid_smaller_than_starting_body_is_rejected() {
        let config = GameConfig {
            grid_size: 8,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::GridTooSmall { grid_size: 8 })
        );
    }

    #[test]
    fn zero_tick_interval_is_rejected() {
        let config = GameConfig {
            tick_interval: Duration::ZERO,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickInterval));
    }
}
