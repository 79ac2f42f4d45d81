use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the collaborators around the game: terminal, logger, audio.
#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal error: {0}")]
    Terminal(#[from] crossterm::ErrorKind),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to initialise logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("terminal is {have_cols}x{have_rows}, the board needs at least {need_cols}x{need_rows}")]
    TerminalTooSmall { need_cols: u16, need_rows: u16, have_cols: u16, have_rows: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cell size must be positive, got {0}")]
    CellSize(i32),

    #[error("{axis} of {pixels}px holds fewer than 3 cells of {cell}px")]
    BoardTooSmall { axis: &'static str, pixels: i32, cell: i32 },

    #[error("{axis} of {pixels}px with {cell}px cells exceeds {max_pixels}px or {max_cells} cells")]
    BoardTooLarge { axis: &'static str, pixels: i32, cell: i32, max_pixels: i32, max_cells: i32 },

    #[error("tick interval must be at least 1ms")]
    TickInterval,
}

/// Why a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Collision {
    #[error("snake ran into itself")]
    SelfCollision,

    #[error("snake left the board")]
    BoundaryCollision,
}
