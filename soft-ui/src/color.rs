//! RGBA colors used by every soft-ui surface.
//!
//! ## Usage
//!
//! Build base colors for surfaces, derive lighter/darker variants with
//! [`Color::offset_rgb`], and check readability with
//! [`Color::contrast_ratio`].

/// A color in the sRGB color space with an alpha component.
///
/// Values are stored as `f32`s, typically in the range `[0.0, 1.0]`.
/// Arithmetic helpers such as [`Color::offset_rgb`] never clamp on their own,
/// so a color may temporarily leave that range; use [`Color::is_in_gamut`]
/// and [`Color::clamped`] to detect and repair it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    #[cfg_attr(feature = "serde", serde(default = "opaque_alpha"))]
    pub a: f32,
}

#[cfg(feature = "serde")]
fn opaque_alpha() -> f32 {
    1.0
}

impl Color {
    // --- Common Colors ---
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    /// Light gray used by the stock drop shadows.
    pub const LIGHT_GRAY: Color = Color::new(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0, 1.0);

    /// Creates a new `Color` from four `f32` values (red, green, blue, alpha).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new opaque `Color` from three `f32` values (red, green, blue).
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a new `Color` from four `u8` values (red, green, blue, alpha).
    #[inline]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Creates a new opaque `Color` from three `u8` values (red, green, blue).
    #[inline]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Creates an opaque color from a packed `0xRRGGBB` value.
    ///
    /// Bits above the low 24 are ignored.
    ///
    /// ```
    /// use soft_ui::Color;
    ///
    /// assert_eq!(Color::from_rgb_hex(0xFF0000), Color::from_rgb(1.0, 0.0, 0.0));
    /// ```
    #[inline]
    pub fn from_rgb_hex(rgb: u32) -> Self {
        Self::from_rgb_u8(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    /// Returns the same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Adds `delta` to each of the red, green and blue channels.
    ///
    /// Alpha is left untouched and no clamping is performed.
    #[inline]
    pub fn offset_rgb(self, delta: f32) -> Self {
        Self {
            r: self.r + delta,
            g: self.g + delta,
            b: self.b + delta,
            a: self.a,
        }
    }

    /// Whether every channel lies in `[0.0, 1.0]`.
    pub fn is_in_gamut(self) -> bool {
        self.to_array().iter().all(|c| (0.0..=1.0).contains(c))
    }

    /// Clamps every channel into `[0.0, 1.0]`.
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Relative luminance as defined by WCAG 2.x.
    ///
    /// Channels are treated as gamma-encoded sRGB and linearized before
    /// weighting. Alpha is ignored.
    pub fn relative_luminance(self) -> f32 {
        0.2126 * srgb_to_linear_channel(self.r)
            + 0.7152 * srgb_to_linear_channel(self.g)
            + 0.0722 * srgb_to_linear_channel(self.b)
    }

    /// WCAG contrast ratio between two colors, in `[1.0, 21.0]`.
    ///
    /// ```
    /// use soft_ui::Color;
    ///
    /// let ratio = Color::BLACK.contrast_ratio(Color::WHITE);
    /// assert!((ratio - 21.0).abs() < 1e-4);
    /// ```
    pub fn contrast_ratio(self, other: Color) -> f32 {
        let l1 = self.relative_luminance();
        let l2 = other.relative_luminance();
        let (darker, lighter) = if l1 < l2 { (l1, l2) } else { (l2, l1) };
        (lighter + 0.05) / (darker + 0.05)
    }

    /// Converts the color to an array of `[f32; 4]`.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

fn srgb_to_linear_channel(v: f32) -> f32 {
    let v = v.clamp(0.0, 1.0);
    if v < 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// The default color is fully transparent.
impl Default for Color {
    #[inline]
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

// --- From Conversions ---

impl From<[f32; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for [f32; 4] {
    #[inline]
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

impl From<[f32; 3]> for Color {
    #[inline]
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

impl From<[u8; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::from_rgba_u8(r, g, b, a)
    }
}

impl From<[u8; 3]> for Color {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::from_rgb_u8(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb_hex() {
        let c = Color::from_rgb_hex(0x0D1445);
        assert_eq!(c, Color::from_rgb_u8(0x0D, 0x14, 0x45));
        assert_eq!(c.a, 1.0);
        // high byte ignored
        assert_eq!(Color::from_rgb_hex(0xFF00_00FF), Color::from_rgb(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_offset_rgb_keeps_alpha_and_does_not_clamp() {
        let c = Color::new(0.1, 0.5, 0.9, 0.4).offset_rgb(0.2);
        assert!((c.r - 0.3).abs() < 1e-6);
        assert!((c.g - 0.7).abs() < 1e-6);
        assert!((c.b - 1.1).abs() < 1e-6);
        assert_eq!(c.a, 0.4);
        assert!(!c.is_in_gamut());
        assert!(c.clamped().is_in_gamut());
        assert_eq!(c.clamped().b, 1.0);
    }

    #[test]
    fn test_luminance_bounds() {
        assert_eq!(Color::BLACK.relative_luminance(), 0.0);
        assert!((Color::WHITE.relative_luminance() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_contrast_ratio_is_symmetric() {
        let a = Color::from_rgb(0.2, 0.4, 0.6);
        let b = Color::from_rgb(0.9, 0.9, 0.9);
        assert_eq!(a.contrast_ratio(b), b.contrast_ratio(a));
        assert!((a.contrast_ratio(a) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_array_conversions() {
        let c: Color = [0.1, 0.2, 0.3].into();
        assert_eq!(c.a, 1.0);
        let arr: [f32; 4] = c.with_alpha(0.5).into();
        assert_eq!(arr, [0.1, 0.2, 0.3, 0.5]);
        let c: Color = [255u8, 0, 0].into();
        assert_eq!(c, Color::from_rgb(1.0, 0.0, 0.0));
    }
}
