use crate::{
    domain::random::{RandomSource, random_percent},
    engine::state::Viewport,
    surface::{Color, CompositeOp, Surface},
};

pub const FADE_ALPHA_PCT: (i64, i64) = (1, 30);

/// Erases a random fraction of every pixel's alpha, leaving a trail rather
/// than a hard clear. Returns the alpha used, in percent.
pub fn fade<S: Surface + ?Sized>(
    surface: &mut S,
    viewport: Viewport,
    rng: &mut impl RandomSource,
) -> u8 {
    let alpha_pct = random_percent(rng, FADE_ALPHA_PCT.0, FADE_ALPHA_PCT.1);
    surface.set_composite(CompositeOp::DestinationOut);
    surface.set_fill_style(Color::black(alpha_pct));
    surface.fill_rect(0.0, 0.0, viewport.width_f64(), viewport.height_f64());
    surface.set_composite(CompositeOp::SourceOver);
    alpha_pct
}
