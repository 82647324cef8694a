// config.rs - Board, canvas and timer settings

use std::time::Duration;

use egui::Color32;

use crate::error::{ConfigError, GridError};

// Compile-time defaults
pub const GRID_WIDTH: usize = 64;                              // Cells per row
pub const GRID_HEIGHT: usize = 48;                             // Cells per column
pub const CANVAS_WIDTH: f32 = 640.0;                           // Logical canvas width in pixels
pub const AUTO_INTERVAL: Duration = Duration::from_millis(100); // 10 generations per second

pub const LINE_COLOR: Color32 = Color32::from_rgb(0x44, 0x44, 0x44);
pub const CELL_COLOR: Color32 = Color32::from_rgb(0xcc, 0xcc, 0xff);
pub const BACKGROUND_COLOR: Color32 = Color32::from_rgb(0x11, 0x11, 0x11);

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub canvas_width: f32,
    pub auto_interval: Duration,
    pub line_color: Color32,
    pub cell_color: Color32,
    pub background: Color32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            canvas_width: CANVAS_WIDTH,
            auto_interval: AUTO_INTERVAL,
            line_color: LINE_COLOR,
            cell_color: CELL_COLOR,
            background: BACKGROUND_COLOR,
        }
    }
}

impl Config {
    pub fn with_dimensions(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_canvas_width(mut self, canvas_width: f32) -> Self {
        self.canvas_width = canvas_width;
        self
    }

    pub fn with_auto_interval(mut self, auto_interval: Duration) -> Self {
        self.auto_interval = auto_interval;
        self
    }

    /// Logical size of one cell: the canvas width split evenly across the columns.
    pub fn cell_size(&self) -> f32 {
        self.canvas_width / self.width.max(1) as f32
    }

    /// Logical canvas size, exactly `width * cell_size` by `height * cell_size`.
    pub fn canvas_size(&self) -> egui::Vec2 {
        let cell = self.cell_size();
        egui::vec2(self.width as f32 * cell, self.height as f32 * cell)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::InvalidDimension {
                width: self.width,
                height: self.height,
            }
            .into());
        }
        if !(self.canvas_width.is_finite() && self.canvas_width > 0.0) {
            return Err(ConfigError::InvalidCanvasWidth(self.canvas_width));
        }
        Ok(())
    }
}
