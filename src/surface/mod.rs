//! Drawing surface abstraction.
//!
//! The engine talks to a 2D surface through a small immediate-mode command
//! set (composite mode, fill/stroke styles, rectangles and polylines). Two
//! surfaces implement it: [`RecordingSurface`] keeps the command stream and
//! [`RasterSurface`] rasterises it into an RGBA grid for the terminal.

mod raster;
mod recording;

use std::fmt;

pub use raster::RasterSurface;
pub use recording::RecordingSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeOp {
    SourceOver,
    /// Removes destination alpha in proportion to source alpha.
    DestinationOut,
}

impl fmt::Display for CompositeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SourceOver => "source-over",
            Self::DestinationOut => "destination-out",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Hsla {
        hue: u16,
        saturation: u8,
        lightness: u8,
        alpha_pct: u8,
    },
    Rgba {
        r: u8,
        g: u8,
        b: u8,
        alpha_pct: u8,
    },
}

impl Color {
    pub const fn black(alpha_pct: u8) -> Self {
        Self::Rgba {
            r: 0,
            g: 0,
            b: 0,
            alpha_pct,
        }
    }

    pub fn alpha_pct(self) -> u8 {
        match self {
            Self::Hsla { alpha_pct, .. } | Self::Rgba { alpha_pct, .. } => alpha_pct,
        }
    }

    pub fn alpha(self) -> f32 {
        f32::from(self.alpha_pct().min(100)) / 100.0
    }

    /// Straight (non-premultiplied) RGBA in `0.0..=1.0`.
    pub fn to_rgba(self) -> [f32; 4] {
        let [r, g, b] = match self {
            Self::Hsla {
                hue,
                saturation,
                lightness,
                ..
            } => hsl_to_rgb(
                f32::from(hue % 360),
                f32::from(saturation.min(100)) / 100.0,
                f32::from(lightness.min(100)) / 100.0,
            ),
            Self::Rgba { r, g, b, .. } => [
                f32::from(r) / 255.0,
                f32::from(g) / 255.0,
                f32::from(b) / 255.0,
            ],
        };
        [r, g, b, self.alpha()]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alpha = f64::from(self.alpha_pct()) / 100.0;
        match *self {
            Self::Hsla {
                hue,
                saturation,
                lightness,
                ..
            } => write!(f, "hsla({hue}, {saturation}%, {lightness}%, {alpha})"),
            Self::Rgba { r, g, b, .. } => write!(f, "rgba({r},{g},{b},{alpha})"),
        }
    }
}

fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> [f32; 3] {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    [r + m, g + m, b + m]
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetComposite(CompositeOp),
    SetFillStyle(Color),
    FillRect { x: f64, y: f64, w: f64, h: f64 },
    SetStrokeStyle(Color),
    SetLineWidth(f64),
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Stroke,
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetComposite(op) => write!(f, "composite {op}"),
            Self::SetFillStyle(color) => write!(f, "fill-style {color}"),
            Self::FillRect { x, y, w, h } => write!(f, "fill-rect {x} {y} {w} {h}"),
            Self::SetStrokeStyle(color) => write!(f, "stroke-style {color}"),
            Self::SetLineWidth(width) => write!(f, "line-width {width}"),
            Self::BeginPath => f.write_str("begin-path"),
            Self::MoveTo { x, y } => write!(f, "move-to {x} {y}"),
            Self::LineTo { x, y } => write!(f, "line-to {x} {y}"),
            Self::Stroke => f.write_str("stroke"),
        }
    }
}

pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    fn set_composite(&mut self, op: CompositeOp);
    fn set_fill_style(&mut self, color: Color);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn set_stroke_style(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);

    fn fill_all(&mut self) {
        let (w, h) = (self.width(), self.height());
        self.fill_rect(0.0, 0.0, w, h);
    }
}
