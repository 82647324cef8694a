// render.rs - Draws the board: separator lines plus one inset square per live cell
//
// Geometry is computed in logical canvas pixels and mapped to the screen
// through a `RectTransform`, so the canvas can be displayed at any scale.

use egui::emath::RectTransform;
use egui::{pos2, vec2, Painter, Pos2, Rect, Stroke};

use crate::config::Config;
use crate::grid::Grid;

/// Separator lines at every interior multiple of `cell_size`, vertical
/// lines first. Each spans the whole canvas.
pub fn grid_lines(width: usize, height: usize, cell_size: f32) -> Vec<[Pos2; 2]> {
    let canvas_w = width as f32 * cell_size;
    let canvas_h = height as f32 * cell_size;

    let vertical = (1..width).map(|i| {
        let x = i as f32 * cell_size;
        [pos2(x, 0.0), pos2(x, canvas_h)]
    });
    let horizontal = (1..height).map(|j| {
        let y = j as f32 * cell_size;
        [pos2(0.0, y), pos2(canvas_w, y)]
    });
    vertical.chain(horizontal).collect()
}

/// Filled area of a live cell: one pixel in from each side so the
/// separator lines stay visible.
pub fn cell_rect(x: usize, y: usize, cell_size: f32) -> Rect {
    Rect::from_min_size(
        pos2(x as f32 * cell_size + 1.0, y as f32 * cell_size + 1.0),
        vec2(cell_size - 2.0, cell_size - 2.0),
    )
}

/// Redraws the whole canvas from scratch.
///
/// `to_screen` maps the logical canvas (`Rect` at the origin with
/// `config.canvas_size()`) onto the area allocated for it.
pub fn full_redraw(painter: &Painter, to_screen: &RectTransform, grid: &Grid, config: &Config) {
    let cell_size = config.cell_size();
    let scale = to_screen.scale().x;

    painter.rect_filled(*to_screen.to(), 0.0, config.background);

    let stroke = Stroke::new(1.0, config.line_color);
    for [from, to] in grid_lines(grid.width(), grid.height(), cell_size) {
        painter.line_segment([to_screen.transform_pos(from), to_screen.transform_pos(to)], stroke);
    }

    for (x, y) in grid.live_cells() {
        let rect = to_screen.transform_rect(cell_rect(x, y, cell_size));
        painter.rect_filled(rect, 0.0, config.cell_color);
    }

    log::trace!("redrew {} live cells at scale {scale:.2}", grid.live_count());
}
