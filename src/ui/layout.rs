use crate::engine::Viewport;

pub const MIN_WIDTH: u16 = 20;
pub const MIN_HEIGHT: u16 = 6;

/// Fallback cell size when the terminal does not report pixel dimensions.
pub const CELL_PIXELS: (u32, u32) = (8, 16);

#[must_use]
pub fn fits(width: u16, height: u16) -> bool {
    width >= MIN_WIDTH && height >= MIN_HEIGHT
}

/// Logical canvas size for a terminal of `cols` x `rows` cells.
#[must_use]
pub fn viewport_for(cols: u16, rows: u16, pixels: Option<(u16, u16)>) -> Viewport {
    match pixels {
        Some((width, height)) if width > 0 && height > 0 => {
            Viewport::new(u32::from(width), u32::from(height))
        }
        _ => Viewport::new(
            u32::from(cols) * CELL_PIXELS.0,
            u32::from(rows) * CELL_PIXELS.1,
        ),
    }
}

/// Raster grid: one pixel per column, two per row (half blocks).
#[must_use]
pub fn raster_grid(cols: u16, rows: u16) -> (usize, usize) {
    (usize::from(cols), usize::from(rows) * 2)
}
