use super::{Color, CompositeOp, Surface};

pub type Pixel = [f32; 4];

const TRANSPARENT: Pixel = [0.0, 0.0, 0.0, 0.0];

/// Software canvas. Commands arrive in logical (viewport) coordinates and are
/// scaled onto a coarser pixel grid, typically one column by half a row of
/// the terminal per pixel.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    width: f64,
    height: f64,
    cols: usize,
    rows: usize,
    pixels: Vec<Pixel>,
    composite: CompositeOp,
    fill_style: Color,
    stroke_style: Color,
    line_width: f64,
    subpaths: Vec<Vec<(f64, f64)>>,
}

impl RasterSurface {
    pub fn new(width: f64, height: f64, cols: usize, rows: usize) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            cols,
            rows,
            pixels: vec![TRANSPARENT; cols * rows],
            composite: CompositeOp::SourceOver,
            fill_style: Color::black(100),
            stroke_style: Color::black(100),
            line_width: 1.0,
            subpaths: Vec::new(),
        }
    }

    pub fn grid_size(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Pixel> {
        if x < self.cols && y < self.rows {
            Some(self.pixels[y * self.cols + x])
        } else {
            None
        }
    }

    /// Pixels with any visible alpha left.
    pub fn lit_pixels(&self) -> usize {
        self.pixels.iter().filter(|px| px[3] > 1.0 / 255.0).count()
    }

    fn scale(&self) -> (f64, f64) {
        (
            self.cols as f64 / self.width,
            self.rows as f64 / self.height,
        )
    }

    fn to_grid(&self, x: f64, y: f64) -> (f64, f64) {
        let (sx, sy) = self.scale();
        (x * sx, y * sy)
    }

    fn blend_at(&mut self, index: usize, src: Pixel) {
        let dst = &mut self.pixels[index];
        *dst = composite(*dst, src, self.composite);
    }

    fn stroke_mask(&self) -> Vec<bool> {
        let mut mask = vec![false; self.pixels.len()];
        let (sx, sy) = self.scale();
        let radius = (self.line_width * (sx + sy) / 2.0 / 2.0).max(0.5);
        for subpath in &self.subpaths {
            for segment in subpath.windows(2) {
                let (x0, y0) = self.to_grid(segment[0].0, segment[0].1);
                let (x1, y1) = self.to_grid(segment[1].0, segment[1].1);
                let length = (x1 - x0).hypot(y1 - y0);
                let steps = (length / 0.5).ceil().max(1.0) as usize;
                for step in 0..=steps {
                    let t = step as f64 / steps as f64;
                    self.stamp(&mut mask, x0 + (x1 - x0) * t, y0 + (y1 - y0) * t, radius);
                }
            }
        }
        mask
    }

    fn stamp(&self, mask: &mut [bool], cx: f64, cy: f64, radius: f64) {
        let min_x = (cx - radius).floor().max(0.0) as usize;
        let min_y = (cy - radius).floor().max(0.0) as usize;
        let max_x = (cx + radius).floor();
        let max_y = (cy + radius).floor();
        if max_x < 0.0 || max_y < 0.0 {
            return;
        }
        let max_x = (max_x as usize).min(self.cols.saturating_sub(1));
        let max_y = (max_y as usize).min(self.rows.saturating_sub(1));
        let home = (cx.floor(), cy.floor());
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let inside = ((x as f64 + 0.5) - cx).abs() <= radius
                    && ((y as f64 + 0.5) - cy).abs() <= radius;
                if inside || (x as f64, y as f64) == home {
                    mask[y * self.cols + x] = true;
                }
            }
        }
    }
}

/// Straight-alpha compositing of `src` onto `dst`.
pub(super) fn composite(dst: Pixel, src: Pixel, op: CompositeOp) -> Pixel {
    let sa = src[3].clamp(0.0, 1.0);
    match op {
        CompositeOp::DestinationOut => [dst[0], dst[1], dst[2], dst[3] * (1.0 - sa)],
        CompositeOp::SourceOver => {
            let da = dst[3];
            let out_a = sa + da * (1.0 - sa);
            if out_a <= f32::EPSILON {
                return TRANSPARENT;
            }
            let channel = |i: usize| (src[i] * sa + dst[i] * da * (1.0 - sa)) / out_a;
            [channel(0), channel(1), channel(2), out_a]
        }
    }
}

impl Surface for RasterSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn set_composite(&mut self, op: CompositeOp) {
        self.composite = op;
    }

    fn set_fill_style(&mut self, color: Color) {
        self.fill_style = color;
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        if self.cols == 0 || self.rows == 0 {
            return;
        }
        let (gx0, gy0) = self.to_grid(x, y);
        let (gx1, gy1) = self.to_grid(x + w, y + h);
        let x0 = gx0.min(gx1).floor().clamp(0.0, self.cols as f64) as usize;
        let x1 = gx0.max(gx1).ceil().clamp(0.0, self.cols as f64) as usize;
        let y0 = gy0.min(gy1).floor().clamp(0.0, self.rows as f64) as usize;
        let y1 = gy0.max(gy1).ceil().clamp(0.0, self.rows as f64) as usize;
        let src = self.fill_style.to_rgba();
        for row in y0..y1 {
            for col in x0..x1 {
                self.blend_at(row * self.cols + col, src);
            }
        }
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.stroke_style = color;
    }

    fn set_line_width(&mut self, width: f64) {
        if width.is_finite() && width > 0.0 {
            self.line_width = width;
        }
    }

    fn begin_path(&mut self) {
        self.subpaths.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.subpaths.push(vec![(x, y)]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        match self.subpaths.last_mut() {
            Some(subpath) => subpath.push((x, y)),
            None => self.subpaths.push(vec![(x, y)]),
        }
    }

    fn stroke(&mut self) {
        if self.cols == 0 || self.rows == 0 {
            return;
        }
        let mask = self.stroke_mask();
        let src = self.stroke_style.to_rgba();
        for (index, covered) in mask.into_iter().enumerate() {
            if covered {
                self.blend_at(index, src);
            }
        }
    }
}
