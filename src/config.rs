use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use simplelog::LevelFilter;

use crate::error::ConfigError;
use crate::geometry::{Board, Position, DEFAULT_CELL_SIZE, MAX_BOARD_CELLS, MAX_BOARD_PIXELS};
use crate::snake::Heading;

#[derive(Debug, Parser)]
#[command(name = "snake")]
#[command(version, about = "Grid snake in your terminal")]
pub struct Cli {
    /// Board width in pixels
    #[arg(long, default_value_t = 1000)]
    pub width: i32,

    /// Board height in pixels
    #[arg(long, default_value_t = 700)]
    pub height: i32,

    /// Edge length of one cell in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: i32,

    /// Milliseconds between two ticks
    #[arg(long, default_value_t = 150)]
    pub tick_ms: u64,

    /// Seed for food placement
    #[arg(long)]
    pub seed: Option<u64>,

    /// Ignore a heading that points straight back into the body
    #[arg(long)]
    pub reversal_guard: bool,

    /// Never drop food onto the snake
    #[arg(long)]
    pub food_avoids_snake: bool,

    /// Where to write the log (defaults to snake.log in the temp dir)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

/// Everything a round needs to know about the board and its rules.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub board: Board,
    pub tick: Duration,
    pub spawn: Position,
    pub spawn_heading: Heading,
    pub initial_food: Position,
    pub seed: Option<u64>,
    pub reversal_guard: bool,
    pub food_avoids_snake: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig::new(1000, 700, DEFAULT_CELL_SIZE)
    }
}

impl GameConfig {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        // Third cell along each axis, pulled inside the margin on tiny boards.
        let food_cell = |pixels: i32| if cell_size > 0 { (pixels / cell_size - 2).clamp(1, 3) } else { 3 };

        GameConfig {
            board: Board::new(width, height, cell_size),
            tick: Duration::from_millis(150),
            spawn: Position::new(cell_size, cell_size),
            spawn_heading: Heading::Down,
            initial_food: Position::new(food_cell(width) * cell_size, food_cell(height) * cell_size),
            seed: None,
            reversal_guard: false,
            food_avoids_snake: false,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let cell = self.board.cell_size();
        if cell <= 0 {
            return Err(ConfigError::CellSize(cell));
        }

        for (axis, pixels) in [("width", self.board.width()), ("height", self.board.height())] {
            if pixels / cell < 3 {
                return Err(ConfigError::BoardTooSmall { axis, pixels, cell });
            }
            if pixels > MAX_BOARD_PIXELS || pixels / cell >= MAX_BOARD_CELLS {
                return Err(ConfigError::BoardTooLarge {
                    axis, pixels, cell, max_pixels: MAX_BOARD_PIXELS, max_cells: MAX_BOARD_CELLS,
                });
            }
        }

        if self.tick.is_zero() {
            return Err(ConfigError::TickInterval);
        }

        Ok(())
    }
}

impl Cli {
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let config = GameConfig {
            tick: Duration::from_millis(self.tick_ms),
            seed: self.seed,
            reversal_guard: self.reversal_guard,
            food_avoids_snake: self.food_avoids_snake,
            ..GameConfig::new(self.width, self.height, self.cell_size)
        };

        config.validate()?;
        Ok(config)
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| std::env::temp_dir().join("snake.log"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board.size(), (1000, 700));
        assert_eq!(config.spawn, Position::new(40, 40));
        assert_eq!(config.spawn_heading, Heading::Down);
        assert_eq!(config.initial_food, Position::new(120, 120));
        assert_eq!(config.tick, Duration::from_millis(150));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_initial_food_inside_small_board() {
        let config = GameConfig::new(120, 160, 40);
        assert_eq!(config.initial_food, Position::new(40, 80));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_defaults_match_default_config() {
        let cli = Cli::try_parse_from(["snake"]).unwrap();
        assert_eq!(cli.game_config().unwrap(), GameConfig::default());
        assert_eq!(cli.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "snake", "--width", "400", "--height", "300", "--cell-size", "20",
            "--tick-ms", "90", "--seed", "42", "--reversal-guard", "--log-level", "debug",
        ]).unwrap();
        let config = cli.game_config().unwrap();

        assert_eq!(config.board, Board::new(400, 300, 20));
        assert_eq!(config.spawn, Position::new(20, 20));
        assert_eq!(config.initial_food, Position::new(60, 60));
        assert_eq!(config.tick, Duration::from_millis(90));
        assert_eq!(config.seed, Some(42));
        assert!(config.reversal_guard);
        assert!(!config.food_avoids_snake);
        assert_eq!(cli.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_rejects_bad_values() {
        let cli = Cli::try_parse_from(["snake", "--cell-size", "0"]).unwrap();
        assert_eq!(cli.game_config(), Err(ConfigError::CellSize(0)));

        let cli = Cli::try_parse_from(["snake", "--height", "100"]).unwrap();
        assert_eq!(
            cli.game_config(),
            Err(ConfigError::BoardTooSmall { axis: "height", pixels: 100, cell: 40 })
        );

        let cli = Cli::try_parse_from(["snake", "--width", "2147483647"]).unwrap();
        assert!(matches!(cli.game_config(), Err(ConfigError::BoardTooLarge { axis: "width", .. })));

        let cli = Cli::try_parse_from(["snake", "--width", "200000000"]).unwrap();
        assert!(matches!(cli.game_config(), Err(ConfigError::BoardTooLarge { axis: "width", .. })));

        // Within the pixel limit but too many cells for a terminal frame.
        let cli = Cli::try_parse_from(["snake", "--height", "40000", "--cell-size", "1"]).unwrap();
        assert_eq!(
            cli.game_config(),
            Err(ConfigError::BoardTooLarge {
                axis: "height", pixels: 40000, cell: 1, max_pixels: MAX_BOARD_PIXELS, max_cells: MAX_BOARD_CELLS,
            })
        );

        let cli = Cli::try_parse_from(["snake", "--width", "40000", "--height", "40000", "--cell-size", "2"]).unwrap();
        assert_eq!(
            cli.game_config(),
            Err(ConfigError::BoardTooLarge {
                axis: "width", pixels: 40000, cell: 2, max_pixels: MAX_BOARD_PIXELS, max_cells: MAX_BOARD_CELLS,
            })
        );

        let cli = Cli::try_parse_from(["snake", "--tick-ms", "0"]).unwrap();
        assert_eq!(cli.game_config(), Err(ConfigError::TickInterval));
    }
}
