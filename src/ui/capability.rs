use crate::cli::ColorArg;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Xterm256,
    Basic16,
}

/// Whether the terminal can show the canvas at all, and at what depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceSupport {
    Unsupported,
    Supported(ColorCapability),
}

impl SurfaceSupport {
    pub fn capability(self) -> Option<ColorCapability> {
        match self {
            Self::Supported(capability) => Some(capability),
            Self::Unsupported => None,
        }
    }

    pub fn is_supported(self) -> bool {
        matches!(self, Self::Supported(_))
    }
}

pub fn detect_surface_support(mode: ColorArg) -> SurfaceSupport {
    let term = std::env::var("TERM").ok();
    let colorterm = std::env::var("COLORTERM").ok();
    let no_color = std::env::var("NO_COLOR").ok();
    detect_surface_support_from(
        mode,
        term.as_deref(),
        colorterm.as_deref(),
        no_color.as_deref(),
    )
}

pub fn detect_surface_support_from(
    mode: ColorArg,
    term: Option<&str>,
    colorterm: Option<&str>,
    no_color: Option<&str>,
) -> SurfaceSupport {
    if colour_disabled(mode, term, no_color) {
        return SurfaceSupport::Unsupported;
    }
    if supports_truecolor(colorterm, term) {
        return SurfaceSupport::Supported(ColorCapability::TrueColor);
    }
    if supports_256_color(term) {
        SurfaceSupport::Supported(ColorCapability::Xterm256)
    } else {
        SurfaceSupport::Supported(ColorCapability::Basic16)
    }
}

fn colour_disabled(mode: ColorArg, term: Option<&str>, no_color: Option<&str>) -> bool {
    match mode {
        ColorArg::Always => false,
        ColorArg::Never => true,
        ColorArg::Auto => {
            no_color.is_some_and(|value| !value.is_empty())
                || term.is_some_and(|value| value.eq_ignore_ascii_case("dumb"))
        }
    }
}

fn supports_truecolor(colorterm: Option<&str>, term: Option<&str>) -> bool {
    let colorterm = colorterm.unwrap_or_default().to_lowercase();
    let term = term.unwrap_or_default().to_lowercase();
    truecolor_hint(&colorterm) || truecolor_hint(&term)
}

fn truecolor_hint(value: &str) -> bool {
    value.contains("truecolor")
        || value.contains("24bit")
        || value.contains("-direct")
        || value.ends_with("direct")
}

fn supports_256_color(term: Option<&str>) -> bool {
    term.unwrap_or_default().to_lowercase().contains("256color")
}
