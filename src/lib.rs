//! Interactive Conway's Game of Life (B3/S23) on a fixed, bounded grid.
//!
//! [`grid::Grid`] holds one generation and computes the next; [`session::Session`]
//! is the controller the egui front-end in [`ui`] drives.

pub mod auto;
pub mod config;
pub mod error;
pub mod grid;
pub mod mapping;
pub mod patterns;
pub mod render;
pub mod session;
pub mod ui;

pub use config::Config;
pub use error::{AppError, ConfigError, GridError, ParseError};
pub use grid::{Cell, Grid};
pub use session::Session;
