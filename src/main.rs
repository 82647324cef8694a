// main.rs - Conway's Game of Life on an egui canvas

use conway_canvas::ui::ConwayApp;
use conway_canvas::{AppError, Config};

fn main() -> Result<(), AppError> {
    env_logger::init();

    let config = Config::default();
    let runtime = tokio::runtime::Runtime::new()?;
    let app = ConwayApp::new(config.clone(), runtime)?;
    log::info!(
        "starting with a {}x{} grid, auto step every {} ms",
        config.width,
        config.height,
        config.auto_interval.as_millis()
    );

    let canvas = config.canvas_size();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([canvas.x + 40.0, canvas.y + 140.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| {
        log::error!("window closed with error: {e}");
        AppError::from(e)
    })
}
