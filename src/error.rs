// error.rs - Error types for the grid core and application startup

use thiserror::Error;

/// Errors raised by [`crate::grid::Grid`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// Width or height was zero at construction.
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimension { width: usize, height: usize },

    /// Coordinates outside `[0, width) x [0, height)`.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Errors from parsing an ASCII board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty board")]
    Empty,

    #[error("unexpected character {ch:?} at ({x}, {y})")]
    UnexpectedChar { ch: char, x: usize, y: usize },

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Errors from [`crate::config::Config::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("canvas width must be finite and positive, got {0}")]
    InvalidCanvasWidth(f32),

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Errors that abort application startup.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to build tokio runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("window error: {0}")]
    Gui(#[from] eframe::Error),
}
