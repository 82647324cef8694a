// session.rs - The controller: owns the current generation and the auto timer

use std::time::Duration;

use egui::Pos2;
use tokio::runtime::Handle;

use crate::auto::{AutoStepper, Waker};
use crate::config::Config;
use crate::error::{ConfigError, ParseError};
use crate::grid::Grid;
use crate::mapping;
use crate::patterns::{self, Pattern};

pub struct Session {
    grid: Grid,
    generation: u64,
    auto: AutoStepper,
    config: Config,
}

impl Session {
    pub fn new(config: Config, runtime: Handle) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height)?;
        let auto = AutoStepper::new(runtime, config.auto_interval);
        Ok(Self {
            grid,
            generation: 0,
            auto,
            config,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_auto(&self) -> bool {
        self.auto.is_running()
    }

    pub fn auto_period(&self) -> Duration {
        self.auto.period()
    }

    /// Toggles the cell under a pointer position given relative to the
    /// canvas origin. Positions that map off the grid are ignored.
    pub fn click(&mut self, local: Pos2, scale: f32) -> Option<(usize, usize)> {
        let Some((x, y)) = mapping::cell_at(
            local,
            self.config.cell_size(),
            scale,
            self.grid.width(),
            self.grid.height(),
        ) else {
            log::debug!("click at ({:.1}, {:.1}) is outside the grid", local.x, local.y);
            return None;
        };
        match self.grid.toggle(x, y) {
            Ok(cell) => {
                log::debug!("toggled ({x}, {y}) to {cell:?}");
                Some((x, y))
            }
            Err(e) => {
                log::debug!("ignoring click: {e}");
                None
            }
        }
    }

    pub fn step(&mut self) {
        self.grid = self.grid.step();
        self.generation += 1;
        log::debug!(
            "generation {}: {} live cells",
            self.generation,
            self.grid.live_count()
        );
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
        log::debug!("grid cleared");
    }

    pub fn toggle_auto(&mut self, waker: Waker) -> bool {
        self.auto.toggle(waker)
    }

    pub fn stop_auto(&mut self) {
        self.auto.stop();
    }

    /// Steps once per timer tick queued since the last call.
    pub fn pump(&mut self) -> usize {
        let ticks = self.auto.take_ticks();
        for _ in 0..ticks {
            self.step();
        }
        ticks
    }

    /// Stops auto stepping and replaces the board with `pattern`.
    pub fn load_pattern(&mut self, pattern: &Pattern) -> Result<usize, ParseError> {
        self.stop_auto();
        let placed = patterns::apply_pattern(&mut self.grid, pattern)?;
        self.generation = 0;
        log::info!("loaded {} ({placed} cells)", pattern.name);
        Ok(placed)
    }

    /// Stops auto stepping and fills the board with seeded noise.
    pub fn randomize(&mut self, seed: u64) {
        self.stop_auto();
        patterns::apply_random_pattern(&mut self.grid, seed);
        self.generation = 0;
        log::info!("random fill (seed {seed}): {} live cells", self.grid.live_count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use egui::pos2;

    fn session() -> Session {
        let config = Config::default().with_dimensions(8, 6).with_canvas_width(80.0);
        Session::new(config, Handle::current()).unwrap()
    }

    #[tokio::test]
    async fn test_rejects_bad_config() {
        let config = Config::default().with_dimensions(0, 6);
        assert!(Session::new(config, Handle::current()).is_err());
    }

    #[tokio::test]
    async fn test_click_toggles_and_ignores_edges() {
        let mut session = session();
        assert_eq!(session.click(pos2(25.0, 37.0), 1.0), Some((2, 3)));
        assert_eq!(session.grid().live_cells().collect::<Vec<_>>(), vec![(2, 3)]);

        assert_eq!(session.click(pos2(80.0, 10.0), 1.0), None);
        assert_eq!(session.click(pos2(10.0, 60.0), 1.0), None);
        assert_eq!(session.click(pos2(-1.0, 10.0), 1.0), None);
        assert_eq!(session.grid().live_count(), 1);

        // Canvas displayed at twice its logical size.
        assert_eq!(session.click(pos2(50.0, 74.0), 2.0), Some((2, 3)));
        assert!(session.grid().is_empty());
    }

    #[tokio::test]
    async fn test_step_and_clear_track_generation() {
        let mut session = session();
        for x in 2..5 {
            session.click(pos2(x as f32 * 10.0 + 5.0, 25.0), 1.0);
        }
        session.step();
        assert_eq!(session.generation(), 1);
        assert_eq!(
            session.grid().live_cells().collect::<Vec<_>>(),
            vec![(3, 1), (3, 2), (3, 3)]
        );

        session.clear();
        assert_eq!(session.generation(), 0);
        assert!(session.grid().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_configured_period_drives_ticks() {
        let config = Config::default()
            .with_dimensions(8, 6)
            .with_canvas_width(80.0)
            .with_auto_interval(Duration::from_millis(250));
        let mut session = Session::new(config, Handle::current()).unwrap();
        assert_eq!(session.auto_period(), Duration::from_millis(250));

        session.toggle_auto(Arc::new(|| ()));
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(session.pump(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_loading_stops_auto() {
        let mut session = session();
        session.toggle_auto(Arc::new(|| ()));
        tokio::time::sleep(Duration::from_millis(250)).await;

        session.load_pattern(&patterns::PATTERNS[1]).unwrap();
        assert!(!session.is_auto());
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(session.pump(), 0);
        assert_eq!(session.generation(), 0);

        session.toggle_auto(Arc::new(|| ()));
        session.randomize(3);
        assert!(!session.is_auto());
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(session.pump(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pump_steps_once_per_tick() {
        let mut session = session();
        session.load_pattern(&patterns::PATTERNS[0]).unwrap();

        assert!(session.toggle_auto(Arc::new(|| ())));
        tokio::time::sleep(Duration::from_millis(450)).await;
        assert_eq!(session.pump(), 4);
        assert_eq!(session.generation(), 4);

        assert!(!session.toggle_auto(Arc::new(|| ())));
        tokio::time::sleep(Duration::from_millis(450)).await;
        assert_eq!(session.pump(), 0);
        assert_eq!(session.generation(), 4);
    }
}
