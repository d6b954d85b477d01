//! Colour helpers.
//!
//! Palette entries are authored as 8-bit sRGB triples. The surface is an sRGB format, so rectangle
//! colours are converted to linear space before they reach the shader; text colours stay in
//! glyphon's own [`Color`] type.

use glyphon::Color;

/// An 8-bit sRGB colour with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Linear-space RGBA in `0.0..=1.0`, as expected by the rectangle pipeline.
    pub fn to_linear(self) -> [f32; 4] {
        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
            f32::from(self.a) / 255.0,
        ]
    }

    /// The same colour as a glyphon text colour.
    pub fn to_text_color(self) -> Color {
        Color::rgba(self.r, self.g, self.b, self.a)
    }
}

fn srgb_to_linear(channel: u8) -> f32 {
    let c = f32::from(channel) / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

pub const GOLD: Rgba = Rgba::rgb(255, 215, 0);
pub const NIGHT_BLUE: Rgba = Rgba::rgb(15, 30, 70);
pub const BROWN: Rgba = Rgba::rgb(139, 69, 19);
pub const DARK_RED: Rgba = Rgba::rgb(139, 0, 0);
pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
pub const RED: Rgba = Rgba::rgb(255, 0, 0);
pub const FLASH_YELLOW: Rgba = Rgba::rgb(255, 255, 0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_conversion_keeps_the_extremes() {
        assert_eq!(WHITE.to_linear(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(BLACK.to_linear(), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn linear_conversion_darkens_midtones() {
        let [r, ..] = Rgba::rgb(128, 0, 0).to_linear();
        assert!(r > 0.2 && r < 0.23, "got {r}");
    }

    #[test]
    fn alpha_is_not_gamma_corrected() {
        let [.., a] = Rgba::rgba(0, 0, 0, 51).to_linear();
        assert!((a - 0.2).abs() < 1e-6);
    }
}
