use crate::{
    domain::{
        bolt::Bolt,
        palette::HueFamily,
        random::{RandomSource, one_in},
    },
    engine::state::Viewport,
    surface::{Color, Surface},
};

/// Independent width bumps, checked in order; the last one that hits wins.
pub const WIDTH_BUMPS: [(i64, f64); 5] = [(30, 2.0), (60, 3.0), (90, 4.0), (120, 5.0), (150, 6.0)];
pub const BRANCH_CHANCE: i64 = 100;
pub const FLICKER_CHANCE: i64 = 30;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub children: usize,
    pub birth_flashes: usize,
    pub flickers: usize,
}

pub fn stroke_width(rng: &mut impl RandomSource) -> f64 {
    let mut width = 1.0;
    for (chance, bumped) in WIDTH_BUMPS {
        if one_in(rng, chance) {
            width = bumped;
        }
    }
    width
}

/// Strokes every bolt. Branches spawned while walking a path join the active
/// set after the pass, so they are first drawn next frame.
pub fn render_bolts<S: Surface + ?Sized>(
    bolts: &mut Vec<Bolt>,
    palette: HueFamily,
    viewport: Viewport,
    surface: &mut S,
    rng: &mut impl RandomSource,
) -> RenderReport {
    let mut report = RenderReport::default();
    let mut children = Vec::new();

    for bolt in bolts.iter_mut() {
        let line = palette.random_stroke(rng);
        let fill = palette.random_fill(rng);
        surface.set_stroke_style(line);
        surface.set_line_width(stroke_width(rng));

        surface.begin_path();
        let origin = bolt.origin();
        surface.move_to(origin.x, origin.y);
        for index in 0..bolt.path().len() {
            let point = bolt.path()[index];
            surface.line_to(point.x, point.y);
            if bolt.can_spawn_child() && one_in(rng, BRANCH_CHANCE) && bolt.take_spawn_right() {
                children.push(Bolt::child(point, rng));
            }
        }

        if !bolt.has_rendered {
            flash(surface, fill, viewport);
            report.birth_flashes += 1;
        }
        if one_in(rng, FLICKER_CHANCE) {
            flash(surface, fill, viewport);
            report.flickers += 1;
        }

        surface.stroke();
    }

    report.children = children.len();
    bolts.append(&mut children);
    report
}

fn flash<S: Surface + ?Sized>(surface: &mut S, fill: Color, viewport: Viewport) {
    surface.set_fill_style(fill);
    surface.fill_rect(0.0, 0.0, viewport.width_f64(), viewport.height_f64());
}
