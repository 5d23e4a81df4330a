use serde::{Deserialize, Serialize};

use crate::{
    domain::random::{RandomSource, random_percent},
    surface::Color,
};

const STROKE_ALPHA_PCT: (i64, i64) = (10, 100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum HueFamily {
    ElectricBlue,
    #[default]
    White,
}

impl HueFamily {
    /// Numeric selector: any non-zero value picks blue, zero or nothing
    /// picks white.
    pub fn from_selector(selector: Option<f64>) -> Self {
        match selector {
            Some(value) if value != 0.0 && !value.is_nan() => Self::ElectricBlue,
            _ => Self::White,
        }
    }

    pub fn hue(self) -> u16 {
        match self {
            Self::ElectricBlue => 200,
            Self::White => 0,
        }
    }

    pub fn lightness(self) -> u8 {
        match self {
            Self::ElectricBlue => 50,
            Self::White => 100,
        }
    }

    fn fill_alpha_pct(self) -> (i64, i64) {
        match self {
            Self::ElectricBlue => (2, 8),
            Self::White => (4, 12),
        }
    }

    pub fn color(self, alpha_pct: u8) -> Color {
        Color::Hsla {
            hue: self.hue(),
            saturation: 100,
            lightness: self.lightness(),
            alpha_pct,
        }
    }

    pub fn random_stroke(self, rng: &mut impl RandomSource) -> Color {
        self.color(random_percent(rng, STROKE_ALPHA_PCT.0, STROKE_ALPHA_PCT.1))
    }

    pub fn random_fill(self, rng: &mut impl RandomSource) -> Color {
        let (min, max) = self.fill_alpha_pct();
        self.color(random_percent(rng, min, max))
    }

    /// Hue rotation applied to the presented canvas. Only the blue palette
    /// carries a filter.
    pub fn tint_filter(self, tint_deg: Option<f64>) -> Option<f64> {
        match self {
            Self::ElectricBlue => tint_deg.filter(|deg| deg.is_finite()),
            Self::White => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedRandom;

    #[test]
    fn selector_maps_non_zero_to_blue() {
        assert_eq!(HueFamily::from_selector(Some(1.0)), HueFamily::ElectricBlue);
        assert_eq!(HueFamily::from_selector(Some(-45.0)), HueFamily::ElectricBlue);
        assert_eq!(HueFamily::from_selector(Some(0.0)), HueFamily::White);
        assert_eq!(HueFamily::from_selector(None), HueFamily::White);
    }

    #[test]
    fn colour_strings_match_palette() {
        let mut rng = ScriptedRandom::new([0.0, 0.999]);
        assert_eq!(
            HueFamily::ElectricBlue.random_stroke(&mut rng).to_string(),
            "hsla(200, 100%, 50%, 0.1)"
        );
        assert_eq!(
            HueFamily::White.random_stroke(&mut rng).to_string(),
            "hsla(0, 100%, 100%, 1)"
        );
    }

    #[test]
    fn fill_alpha_ranges_differ_by_family() {
        let mut rng = ScriptedRandom::new([0.0, 0.999, 0.0, 0.999]);
        assert_eq!(HueFamily::ElectricBlue.random_fill(&mut rng).alpha_pct(), 2);
        assert_eq!(HueFamily::ElectricBlue.random_fill(&mut rng).alpha_pct(), 8);
        assert_eq!(HueFamily::White.random_fill(&mut rng).alpha_pct(), 4);
        assert_eq!(HueFamily::White.random_fill(&mut rng).alpha_pct(), 12);
    }

    #[test]
    fn tint_only_applies_to_blue() {
        assert_eq!(HueFamily::ElectricBlue.tint_filter(Some(90.0)), Some(90.0));
        assert_eq!(HueFamily::ElectricBlue.tint_filter(Some(0.0)), Some(0.0));
        assert_eq!(HueFamily::ElectricBlue.tint_filter(None), None);
        assert_eq!(HueFamily::White.tint_filter(Some(90.0)), None);
    }
}
