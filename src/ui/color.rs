use ratatui::style::Color;

use crate::ui::capability::ColorCapability;

pub type Rgb = (u8, u8, u8);

/// CSS `hue-rotate()` matrix, applied to linear 0..1 channels.
pub fn hue_rotate(rgb: [f32; 3], degrees: f64) -> [f32; 3] {
    let radians = degrees.to_radians();
    let (sin, cos) = (radians.sin() as f32, radians.cos() as f32);
    let [r, g, b] = rgb;
    let out = [
        (0.213 + 0.787 * cos - 0.213 * sin) * r
            + (0.715 - 0.715 * cos - 0.715 * sin) * g
            + (0.072 - 0.072 * cos + 0.928 * sin) * b,
        (0.213 - 0.213 * cos + 0.143 * sin) * r
            + (0.715 + 0.285 * cos + 0.140 * sin) * g
            + (0.072 - 0.072 * cos - 0.283 * sin) * b,
        (0.213 - 0.213 * cos - 0.787 * sin) * r
            + (0.715 - 0.715 * cos + 0.715 * sin) * g
            + (0.072 + 0.928 * cos + 0.072 * sin) * b,
    ];
    out.map(|channel| channel.clamp(0.0, 1.0))
}

pub fn to_rgb8(rgb: [f32; 3]) -> Rgb {
    let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    (byte(rgb[0]), byte(rgb[1]), byte(rgb[2]))
}

pub fn quantize(rgb: Rgb, capability: ColorCapability) -> Color {
    let (r, g, b) = rgb;
    match capability {
        ColorCapability::TrueColor => Color::Rgb(r, g, b),
        ColorCapability::Xterm256 => {
            let to_cube = |v: u8| -> u8 { ((f32::from(v) / 255.0) * 5.0).round() as u8 };
            Color::Indexed(16 + 36 * to_cube(r) + 6 * to_cube(g) + to_cube(b))
        }
        ColorCapability::Basic16 => basic16_from_rgb(r, g, b),
    }
}

fn basic16_from_rgb(r: u8, g: u8, b: u8) -> Color {
    let rf = f32::from(r) / 255.0;
    let gf = f32::from(g) / 255.0;
    let bf = f32::from(b) / 255.0;

    let max = rf.max(gf.max(bf));
    let min = rf.min(gf.min(bf));
    let delta = max - min;
    let light = (max + min) / 2.0;

    if delta < 0.08 {
        return match light {
            l if l < 0.20 => Color::Black,
            l if l < 0.40 => Color::DarkGray,
            l if l < 0.72 => Color::Gray,
            _ => Color::White,
        };
    }

    let hue = if (max - rf).abs() < f32::EPSILON {
        60.0 * ((gf - bf) / delta).rem_euclid(6.0)
    } else if (max - gf).abs() < f32::EPSILON {
        60.0 * (((bf - rf) / delta) + 2.0)
    } else {
        60.0 * (((rf - gf) / delta) + 4.0)
    };

    let bright = light >= 0.55;
    let (dim, lit) = match hue {
        h if !(30.0..330.0).contains(&h) => (Color::Red, Color::LightRed),
        h if h < 90.0 => (Color::Yellow, Color::LightYellow),
        h if h < 150.0 => (Color::Green, Color::LightGreen),
        h if h < 210.0 => (Color::Cyan, Color::LightCyan),
        h if h < 270.0 => (Color::Blue, Color::LightBlue),
        _ => (Color::Magenta, Color::LightMagenta),
    };
    if bright { lit } else { dim }
}
