//! Chart Color Module
//! Structured RGBA colors and the fixed dashboard palette.

use plotters::style::{RGBAColor, RGBColor};
use serde::{Deserialize, Serialize};

/// Base color for the skills chart
pub const SKILLS_BLUE: Rgba = Rgba::new(54, 162, 235, 0.6);
/// Base color for the salary chart
pub const SALARY_TEAL: Rgba = Rgba::new(75, 192, 192, 0.6);
/// Base color for the responsibilities chart
pub const RESPONSIBILITY_PURPLE: Rgba = Rgba::new(153, 102, 255, 0.6);

/// Pie slice palette, cycled when a mapping has more than four keys
pub const PIE_PALETTE: [Rgba; 4] = [
    Rgba::new(255, 99, 132, 0.6), // Red
    Rgba::new(54, 162, 235, 0.6), // Blue
    Rgba::new(255, 206, 86, 0.6), // Yellow
    Rgba::new(75, 192, 192, 0.6), // Teal
];

/// An RGBA color with 8-bit channels and a fractional alpha.
///
/// Carrying the components separately keeps border derivation a pure
/// operation on the alpha channel instead of a substring rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// The same hue at full opacity. Bar borders use this variant of the fill.
    pub fn opaque(self) -> Self {
        Self { a: 1.0, ..self }
    }

    /// CSS `rgba(...)` notation, e.g. `rgba(54, 162, 235, 0.6)`.
    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    pub fn to_plotters(self) -> RGBAColor {
        RGBAColor(self.r, self.g, self.b, self.a)
    }

    /// Alpha-blend over a white background, for APIs that take opaque colors.
    pub fn flattened(self) -> RGBColor {
        let blend = |c: u8| (c as f64 * self.a + 255.0 * (1.0 - self.a)).round() as u8;
        RGBColor(blend(self.r), blend(self.g), blend(self.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_sets_alpha_to_one_and_keeps_the_hue() {
        let border = SKILLS_BLUE.opaque();
        assert_eq!(border, Rgba::new(54, 162, 235, 1.0));
    }

    #[test]
    fn css_notation_matches_the_source_format() {
        assert_eq!(SKILLS_BLUE.to_css(), "rgba(54, 162, 235, 0.6)");
        assert_eq!(SKILLS_BLUE.opaque().to_css(), "rgba(54, 162, 235, 1)");
    }

    #[test]
    fn flattened_blends_against_white() {
        let opaque = Rgba::new(100, 100, 100, 1.0).flattened();
        assert_eq!(opaque, RGBColor(100, 100, 100));

        let transparent = Rgba::new(0, 0, 0, 0.0).flattened();
        assert_eq!(transparent, RGBColor(255, 255, 255));
    }
}
