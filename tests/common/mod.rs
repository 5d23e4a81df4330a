#![allow(dead_code)]

use terminal_thunder::{
    app::{
        effect::{EffectOptions, ThunderEffect},
        scheduler::ManualScheduler,
    },
    domain::{
        palette::HueFamily,
        random::{RandomSource, SeededRandom},
    },
    engine::{FrameReport, Viewport},
    surface::RecordingSurface,
};

/// Always returns the same unit sample.
#[derive(Debug, Clone, Copy)]
pub struct FixedUnit(pub f64);

impl RandomSource for FixedUnit {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

pub struct Harness {
    pub effect: ThunderEffect<RecordingSurface>,
    pub scheduler: ManualScheduler,
    pub rng: SeededRandom,
}

impl Harness {
    pub fn mounted(palette: HueFamily, viewport: Viewport, seed: u64) -> Self {
        let mut effect = ThunderEffect::new(EffectOptions {
            palette,
            ..EffectOptions::default()
        });
        let mut scheduler = ManualScheduler::new();
        let surface = RecordingSurface::new(viewport.width_f64(), viewport.height_f64());
        effect
            .mount(viewport, Some(surface), &mut scheduler)
            .expect("mount");
        Self {
            effect,
            scheduler,
            rng: SeededRandom::seeded(seed),
        }
    }

    /// Fires the pending frame request, if any.
    pub fn frame(&mut self) -> Option<FrameReport> {
        let due = self.scheduler.take_due()?;
        self.effect
            .on_frame(due, &mut self.scheduler, &mut self.rng)
    }

    pub fn run(&mut self, frames: usize) -> Vec<FrameReport> {
        (0..frames).filter_map(|_| self.frame()).collect()
    }
}
