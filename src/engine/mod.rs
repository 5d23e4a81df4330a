//! Procedural lightning engine.
//!
//! One frame runs four passes over an [`EffectState`]: fade the surface,
//! extend and retire bolts, run the spawn timer, then render (which may
//! branch). The passes only touch the state, the surface and the random
//! source they are handed, so a seeded frame sequence replays exactly.

pub mod fader;
pub mod extender;
pub mod renderer;
pub mod spawner;
pub mod state;

use tracing::trace;

use crate::{domain::random::RandomSource, surface::Surface};

pub use state::{EffectState, SpawnTimer, Viewport};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub frame: u64,
    pub fade_alpha_pct: u8,
    pub retired: usize,
    pub spawned_roots: usize,
    pub spawned_children: usize,
    pub birth_flashes: usize,
    pub flickers: usize,
    pub active: usize,
}

pub fn step<S: Surface + ?Sized>(
    state: &mut EffectState,
    surface: &mut S,
    rng: &mut impl RandomSource,
) -> FrameReport {
    state.frame = state.frame.saturating_add(1);

    let fade_alpha_pct = fader::fade(surface, state.viewport, rng);
    let retired = extender::extend_bolts(&mut state.bolts, rng);
    let spawned_roots = spawner::run_spawn_timer(state, rng).map_or(0, |strike| strike.roots);
    let render = renderer::render_bolts(
        &mut state.bolts,
        state.palette,
        state.viewport,
        surface,
        rng,
    );

    let report = FrameReport {
        frame: state.frame,
        fade_alpha_pct,
        retired,
        spawned_roots,
        spawned_children: render.children,
        birth_flashes: render.birth_flashes,
        flickers: render.flickers,
        active: state.bolts.len(),
    };
    trace!(?report, "frame");
    report
}
