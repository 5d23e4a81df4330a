use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use crate::{
    surface::RasterSurface,
    ui::{
        capability::ColorCapability,
        color::{hue_rotate, quantize, to_rgb8},
    },
};

const UPPER_HALF: &str = "▀";
const SHADE_RAMP: [char; 10] = [' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];
const VISIBLE: f32 = 1.0 / 255.0;

/// Draws the raster with one `▀` per two vertical pixels, composited over
/// black. Cells with nothing lit are left untouched.
#[derive(Debug, Clone, Copy)]
pub struct CanvasView<'a> {
    surface: &'a RasterSurface,
    capability: ColorCapability,
    hue_rotation: Option<f64>,
}

impl<'a> CanvasView<'a> {
    pub fn new(
        surface: &'a RasterSurface,
        capability: ColorCapability,
        hue_rotation: Option<f64>,
    ) -> Self {
        Self {
            surface,
            capability,
            hue_rotation,
        }
    }
}

impl Widget for CanvasView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (cols, rows) = self.surface.grid_size();
        for cy in 0..area.height {
            let top_y = usize::from(cy) * 2;
            if top_y >= rows {
                break;
            }
            for cx in 0..area.width {
                let x = usize::from(cx);
                if x >= cols {
                    break;
                }
                let top = presented(self.surface, x, top_y, self.hue_rotation);
                let bottom = presented(self.surface, x, top_y + 1, self.hue_rotation);
                if !lit(top) && !lit(bottom) {
                    continue;
                }
                if let Some(cell) = buf.cell_mut((area.x + cx, area.y + cy)) {
                    cell.set_symbol(UPPER_HALF)
                        .set_fg(self.color(top))
                        .set_bg(self.color(bottom));
                }
            }
        }
    }
}

impl CanvasView<'_> {
    fn color(&self, rgb: [f32; 3]) -> Color {
        quantize(to_rgb8(rgb), self.capability)
    }
}

/// Pixel colour after the hue filter, pre-multiplied onto black.
fn presented(
    surface: &RasterSurface,
    x: usize,
    y: usize,
    hue_rotation: Option<f64>,
) -> [f32; 3] {
    let Some([r, g, b, a]) = surface.pixel(x, y) else {
        return [0.0; 3];
    };
    let rgb = match hue_rotation {
        Some(degrees) => hue_rotate([r, g, b], degrees),
        None => [r, g, b],
    };
    rgb.map(|channel| channel * a.clamp(0.0, 1.0))
}

fn lit(rgb: [f32; 3]) -> bool {
    rgb.iter().any(|channel| *channel > VISIBLE)
}

fn luma(rgb: [f32; 3]) -> f32 {
    0.2126 * rgb[0] + 0.7152 * rgb[1] + 0.0722 * rgb[2]
}

/// Monochrome rendering for non-interactive output: one character per cell,
/// brightness picked from the brighter of its two pixels.
pub fn ascii_frame(surface: &RasterSurface, hue_rotation: Option<f64>) -> String {
    let (cols, rows) = surface.grid_size();
    let mut lines = Vec::with_capacity(rows.div_ceil(2));
    for top_y in (0..rows).step_by(2) {
        let mut line = String::with_capacity(cols);
        for x in 0..cols {
            let top = luma(presented(surface, x, top_y, hue_rotation));
            let bottom = luma(presented(surface, x, top_y + 1, hue_rotation));
            let level = top.max(bottom).clamp(0.0, 1.0);
            let index = (level * (SHADE_RAMP.len() - 1) as f32).round() as usize;
            line.push(SHADE_RAMP[index.min(SHADE_RAMP.len() - 1)]);
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Color as CanvasColor, Surface};

    fn white(alpha_pct: u8) -> CanvasColor {
        CanvasColor::Hsla {
            hue: 0,
            saturation: 100,
            lightness: 100,
            alpha_pct,
        }
    }

    #[test]
    fn blank_canvas_leaves_buffer_untouched() {
        let surface = RasterSurface::new(80.0, 40.0, 10, 4);
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        CanvasView::new(&surface, ColorCapability::TrueColor, None).render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }

    #[test]
    fn half_blocks_split_top_and_bottom_pixels() {
        let mut surface = RasterSurface::new(10.0, 4.0, 10, 4);
        surface.set_fill_style(white(100));
        surface.fill_rect(0.0, 0.0, 1.0, 1.0);
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        CanvasView::new(&surface, ColorCapability::TrueColor, None).render(area, &mut buf);

        let cell = &buf[(0, 0)];
        assert_eq!(cell.symbol(), "▀");
        assert_eq!(cell.fg, Color::Rgb(255, 255, 255));
        assert_eq!(cell.bg, Color::Rgb(0, 0, 0));
        assert_eq!(buf[(1, 0)].symbol(), " ");
    }

    #[test]
    fn alpha_dims_presented_colour() {
        let mut surface = RasterSurface::new(1.0, 2.0, 1, 2);
        surface.set_fill_style(white(50));
        surface.fill_all();
        let area = Rect::new(0, 0, 1, 1);
        let mut buf = Buffer::empty(area);
        CanvasView::new(&surface, ColorCapability::TrueColor, None).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].fg, Color::Rgb(128, 128, 128));
    }

    #[test]
    fn ascii_frame_ramps_brightness() {
        let mut surface = RasterSurface::new(3.0, 2.0, 3, 2);
        surface.set_fill_style(white(100));
        surface.fill_rect(0.0, 0.0, 1.0, 1.0);
        surface.set_fill_style(white(40));
        surface.fill_rect(1.0, 1.0, 1.0, 1.0);
        assert_eq!(ascii_frame(&surface, None), "@=");
    }
}
