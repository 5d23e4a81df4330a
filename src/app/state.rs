mod input;

#[cfg(test)]
mod tests;

use anyhow::Result;
use crossterm::event::Event;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::{
    app::{
        effect::{LifecycleError, ThunderEffect},
        events::AppEvent,
        scheduler::TokioFrameScheduler,
    },
    config::EffectConfig,
    domain::random::SeededRandom,
    engine::FrameReport,
    surface::RasterSurface,
    ui::{
        capability::SurfaceSupport,
        layout::{raster_grid, viewport_for},
    },
};

#[derive(Debug)]
pub struct AppState {
    pub running: bool,
    pub config: EffectConfig,
    pub support: SurfaceSupport,
    pub effect: ThunderEffect<RasterSurface>,
    pub scheduler: TokioFrameScheduler,
    pub rng: SeededRandom,
    pub last_report: Option<FrameReport>,
    pub frames_drawn: u64,
}

impl AppState {
    pub fn new(config: EffectConfig, support: SurfaceSupport, tx: mpsc::Sender<AppEvent>) -> Self {
        Self {
            running: true,
            support,
            effect: ThunderEffect::new(config.effect_options()),
            scheduler: TokioFrameScheduler::new(tx, config.fps),
            rng: SeededRandom::from_seed_option(config.seed),
            last_report: None,
            frames_drawn: 0,
            config,
        }
    }

    /// Sizes the canvas to the terminal once. Later resizes are not followed.
    pub fn mount(
        &mut self,
        cols: u16,
        rows: u16,
        pixels: Option<(u16, u16)>,
    ) -> Result<(), LifecycleError> {
        let viewport = viewport_for(cols, rows, pixels);
        let (grid_cols, grid_rows) = raster_grid(cols, rows);
        let surface = self.support.is_supported().then(|| {
            RasterSurface::new(
                viewport.width_f64(),
                viewport.height_f64(),
                grid_cols,
                grid_rows,
            )
        });
        self.effect.mount(viewport, surface, &mut self.scheduler)
    }

    pub fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::FrameDue(request) => {
                if let Some(report) =
                    self.effect
                        .on_frame(request, &mut self.scheduler, &mut self.rng)
                {
                    self.frames_drawn = self.frames_drawn.saturating_add(1);
                    self.last_report = Some(report);
                }
            }
            AppEvent::Input(event) => self.handle_input(event),
            AppEvent::Quit => self.quit(),
        }
        Ok(())
    }

    fn handle_input(&mut self, event: Event) {
        match event {
            Event::Key(key) if input::is_quit_key(key) => self.quit(),
            Event::Resize(width, height) => {
                debug!(width, height, "terminal resized, canvas keeps its mount size");
            }
            _ => {}
        }
    }

    pub fn quit(&mut self) {
        if !self.running {
            return;
        }
        self.effect.unmount(&mut self.scheduler);
        self.running = false;
        info!(frames = self.frames_drawn, "quitting");
    }
}
