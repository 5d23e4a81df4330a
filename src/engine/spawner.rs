use tracing::debug;

use crate::{
    domain::{
        bolt::{Bolt, Point},
        random::{RandomSource, random_int},
    },
    engine::state::{EffectState, Viewport},
};

pub const SPAWN_MARGIN: u32 = 100;
pub const ROOTS_PER_STRIKE: (i64, i64) = (1, 3);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strike {
    pub origin: Point,
    pub roots: usize,
}

/// Random strike origin in the upper half. Canvases narrower than twice the
/// margin strike at the horizontal centre.
pub fn strike_origin(viewport: Viewport, rng: &mut impl RandomSource) -> Point {
    let x = if viewport.width >= SPAWN_MARGIN * 2 {
        random_int(
            rng,
            i64::from(SPAWN_MARGIN),
            i64::from(viewport.width - SPAWN_MARGIN),
        )
    } else {
        i64::from(viewport.width / 2)
    };
    let y = random_int(rng, 0, i64::from(viewport.height / 2));
    Point::new(x as f64, y as f64)
}

/// Advances the spawn timer and, when it fires, adds 1 to 3 root bolts that
/// share one origin.
pub fn run_spawn_timer(state: &mut EffectState, rng: &mut impl RandomSource) -> Option<Strike> {
    if !state.timer.tick(rng) {
        return None;
    }
    let origin = strike_origin(state.viewport, rng);
    let roots = random_int(rng, ROOTS_PER_STRIKE.0, ROOTS_PER_STRIKE.1) as usize;
    for _ in 0..roots {
        state.bolts.push(Bolt::root(origin, rng));
    }
    debug!(
        x = origin.x,
        y = origin.y,
        roots,
        next_interval = state.timer.interval_frames(),
        "lightning strike"
    );
    Some(Strike { origin, roots })
}
