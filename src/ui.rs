// ui.rs - eframe front-end: buttons, pointer input and the canvas

use std::sync::Arc;

use egui::emath::RectTransform;
use egui::{Rect, Sense};
use tokio::runtime::Runtime;

use crate::config::Config;
use crate::error::AppError;
use crate::mapping;
use crate::patterns;
use crate::render;
use crate::session::Session;

pub struct ConwayApp {
    session: Session,
    selected_pattern: usize,
    random_seed: u64,
    _runtime: Runtime, // drives the auto-step timer; must outlive `session`
}

impl ConwayApp {
    pub fn new(config: Config, runtime: Runtime) -> Result<Self, AppError> {
        let session = Session::new(config, runtime.handle().clone())?;
        Ok(Self {
            session,
            selected_pattern: 0,
            random_seed: 0,
            _runtime: runtime,
        })
    }

    fn controls(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            if ui.button("Step").clicked() {
                self.session.step();
            }

            if ui.button("Clear").clicked() {
                self.session.clear();
            }

            if ui.selectable_label(self.session.is_auto(), "Auto").clicked() {
                let ctx = ctx.clone();
                self.session.toggle_auto(Arc::new(move || ctx.request_repaint()));
            }

            ui.separator();

            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });

            if ui.button("Load").clicked() {
                if let Err(e) = self.session.load_pattern(&patterns::PATTERNS[self.selected_pattern]) {
                    log::error!("bad pattern table entry: {e}");
                }
            }

            if ui.button("Random").clicked() {
                self.random_seed = self.random_seed.wrapping_add(1);
                self.session.randomize(self.random_seed);
            }
        });
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let logical = self.session.config().canvas_size();
        // Fill the available width, keeping the aspect ratio.
        let scale = mapping::scale_factor(ui.available_width(), logical.x).clamp(0.25, 4.0);
        let (response, painter) = ui.allocate_painter(logical * scale, Sense::click());
        let to_screen = RectTransform::from_to(Rect::from_min_size(egui::Pos2::ZERO, logical), response.rect);

        let pressed = ui.input(|i| i.pointer.primary_pressed());
        if pressed {
            if let Some(pos) = response.hover_pos() {
                let local = (pos - response.rect.min).to_pos2();
                let scale = mapping::scale_factor(response.rect.width(), logical.x);
                self.session.click(local, scale);
            }
        }

        render::full_redraw(&painter, &to_screen, self.session.grid(), self.session.config());
    }
}

impl eframe::App for ConwayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply timer ticks queued since the last frame.
        self.session.pump();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            self.controls(ui, ctx);

            ui.separator();

            self.canvas(ui);

            ui.separator();

            let grid = self.session.grid();
            ui.horizontal(|ui| {
                ui.label(format!("Generation: {}", self.session.generation()));
                ui.label(format!("Live cells: {}", grid.live_count()));
                ui.label(format!("{}x{}", grid.width(), grid.height()));
                ui.label(format!("Auto: every {} ms", self.session.auto_period().as_millis()));
            });
        });
    }
}
