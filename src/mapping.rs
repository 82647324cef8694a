// mapping.rs - Pointer position to grid cell

use egui::Pos2;

/// Ratio between the size the canvas is displayed at and its logical size.
///
/// Falls back to 1 when the logical width is not usable.
pub fn scale_factor(displayed_width: f32, logical_width: f32) -> f32 {
    if logical_width > 0.0 && displayed_width.is_finite() && displayed_width > 0.0 {
        displayed_width / logical_width
    } else {
        1.0
    }
}

/// Maps a position relative to the canvas' top-left corner to a cell.
///
/// `cell = floor(local / cell_size / scale)` on each axis. Anything that lands
/// outside `[0, width) x [0, height)` yields `None`.
pub fn cell_at(
    local: Pos2,
    cell_size: f32,
    scale: f32,
    width: usize,
    height: usize,
) -> Option<(usize, usize)> {
    if !(cell_size.is_finite() && cell_size > 0.0 && scale.is_finite() && scale > 0.0) {
        return None;
    }
    let x = axis(local.x, cell_size, scale, width)?;
    let y = axis(local.y, cell_size, scale, height)?;
    Some((x, y))
}

fn axis(local: f32, cell_size: f32, scale: f32, len: usize) -> Option<usize> {
    let cell = (local / cell_size / scale).floor();
    (cell.is_finite() && cell >= 0.0 && cell < len as f32).then_some(cell as usize)
}
