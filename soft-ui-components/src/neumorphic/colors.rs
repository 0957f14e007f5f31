//! Shadow and gradient colors derived from a surface's base color.

use soft_ui::Color;
use tracing::warn;

use crate::error::{ColorRole, StyleError};

/// Intensity is authored on a 0-255 scale and divided by this before use.
pub const INTENSITY_SCALE: f32 = 255.0;

/// Channel offset of the gradient stops, independent of intensity.
pub const GRADIENT_OFFSET: f32 = 25.0 / 255.0;

/// What to do when a derived channel leaves `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ColorOverflow {
    /// Clamp each channel into `[0, 1]`.
    #[default]
    Clamp,
    /// Fail the render with [`StyleError::ChannelOutOfRange`].
    Reject,
    /// Keep out-of-range channels as computed.
    Preserve,
}

/// The four colors a neumorphic surface is painted with.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DerivedColors {
    /// Base darkened by `intensity / 255`.
    pub shadow_dark: Color,
    /// Base lightened by `intensity / 255`.
    pub shadow_light: Color,
    /// Base darkened by `25 / 255`.
    pub gradient_dark: Color,
    /// Base lightened by `25 / 255`.
    pub gradient_light: Color,
}

impl DerivedColors {
    /// Derives the colors without any range handling.
    ///
    /// The base alpha is ignored; every derived color is opaque.
    ///
    /// ```
    /// use soft_ui::Color;
    /// use soft_ui_components::neumorphic::DerivedColors;
    ///
    /// let colors = DerivedColors::derive(Color::from_rgb(0.5, 0.5, 0.5), 51.0);
    /// assert!((colors.shadow_dark.r - 0.3).abs() < 1e-6);
    /// assert!((colors.shadow_light.r - 0.7).abs() < 1e-6);
    /// ```
    pub fn derive(base: Color, intensity: f32) -> Self {
        let base = base.with_alpha(1.0);
        let delta = intensity / INTENSITY_SCALE;
        Self {
            shadow_dark: base.offset_rgb(-delta),
            shadow_light: base.offset_rgb(delta),
            gradient_dark: base.offset_rgb(-GRADIENT_OFFSET),
            gradient_light: base.offset_rgb(GRADIENT_OFFSET),
        }
    }

    fn roles(&self) -> [(ColorRole, Color); 4] {
        [
            (ColorRole::ShadowDark, self.shadow_dark),
            (ColorRole::ShadowLight, self.shadow_light),
            (ColorRole::GradientDark, self.gradient_dark),
            (ColorRole::GradientLight, self.gradient_light),
        ]
    }

    /// Whether every channel of every derived color lies in `[0, 1]`.
    pub fn is_in_gamut(&self) -> bool {
        self.roles().iter().all(|(_, color)| color.is_in_gamut())
    }

    /// Applies an overflow policy to the derived colors.
    pub fn resolve(self, policy: ColorOverflow) -> Result<Self, StyleError> {
        if self.is_in_gamut() {
            return Ok(self);
        }
        warn!(?policy, "derived neumorphic color out of range");

        match policy {
            ColorOverflow::Preserve => Ok(self),
            ColorOverflow::Clamp => Ok(Self {
                shadow_dark: self.shadow_dark.clamped(),
                shadow_light: self.shadow_light.clamped(),
                gradient_dark: self.gradient_dark.clamped(),
                gradient_light: self.gradient_light.clamped(),
            }),
            ColorOverflow::Reject => {
                for (role, color) in self.roles() {
                    for (channel, value) in [("red", color.r), ("green", color.g), ("blue", color.b)]
                    {
                        if !(0.0..=1.0).contains(&value) {
                            return Err(StyleError::ChannelOutOfRange {
                                role,
                                channel,
                                value,
                            });
                        }
                    }
                }
                Ok(self)
            }
        }
    }
}

/// Derives the shadow and gradient colors for `base` at `intensity`.
///
/// Shorthand for [`DerivedColors::derive`].
pub fn derive_colors(base: Color, intensity: f32) -> DerivedColors {
    DerivedColors::derive(base, intensity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_shadow_colors_are_symmetric_around_base() {
        let bases = [
            Color::from_rgb(0.9, 0.9, 0.9),
            Color::from_rgb(0.2, 0.5, 0.7),
            Color::from_rgb(0.5, 0.5, 0.5),
        ];
        for base in bases {
            for intensity in [0.0, 5.0, 10.0, 25.0] {
                let colors = derive_colors(base, intensity);
                assert!(approx_eq((colors.shadow_dark.r + colors.shadow_light.r) / 2.0, base.r));
                assert!(approx_eq((colors.shadow_dark.g + colors.shadow_light.g) / 2.0, base.g));
                assert!(approx_eq((colors.shadow_dark.b + colors.shadow_light.b) / 2.0, base.b));
            }
        }
    }

    #[test]
    fn test_gradient_offset_ignores_intensity() {
        let base = Color::from_rgb(0.5, 0.5, 0.5);
        let low = derive_colors(base, 1.0);
        let high = derive_colors(base, 60.0);
        assert_eq!(low.gradient_dark, high.gradient_dark);
        assert_eq!(low.gradient_light, high.gradient_light);
        assert!(approx_eq(low.gradient_dark.r, 0.5 - 25.0 / 255.0));
        assert!(approx_eq(low.gradient_light.b, 0.5 + 25.0 / 255.0));
    }

    #[test]
    fn test_derived_colors_are_opaque() {
        let colors = derive_colors(Color::new(0.5, 0.5, 0.5, 0.2), 10.0);
        for (_, color) in colors.roles() {
            assert_eq!(color.a, 1.0);
        }
    }

    #[test]
    fn test_overflow_clamp() {
        // intensity 300 pushes a dark base below zero
        let colors = derive_colors(Color::from_rgb(0.1, 0.1, 0.1), 300.0);
        assert!(colors.shadow_dark.r < 0.0);
        let clamped = colors.resolve(ColorOverflow::Clamp).expect("clamp never fails");
        assert_eq!(clamped.shadow_dark, Color::from_rgb(0.0, 0.0, 0.0));
        assert_eq!(clamped.shadow_light, Color::from_rgb(1.0, 1.0, 1.0));
        assert!(clamped.is_in_gamut());
    }

    #[test]
    fn test_overflow_preserve_keeps_raw_values() {
        let colors = derive_colors(Color::from_rgb(0.1, 0.1, 0.1), 300.0);
        let preserved = colors.resolve(ColorOverflow::Preserve).expect("preserve never fails");
        assert_eq!(preserved, colors);
        assert!(approx_eq(preserved.shadow_dark.r, 0.1 - 300.0 / 255.0));
    }

    #[test]
    fn test_overflow_reject_reports_first_channel() {
        let colors = derive_colors(Color::from_rgb(0.1, 0.1, 0.1), 300.0);
        match colors.resolve(ColorOverflow::Reject) {
            Err(StyleError::ChannelOutOfRange {
                role,
                channel,
                value,
            }) => {
                assert_eq!(role, ColorRole::ShadowDark);
                assert_eq!(channel, "red");
                assert!(value < 0.0);
            }
            other => panic!("expected channel error, got {other:?}"),
        }
    }

    #[test]
    fn test_in_gamut_colors_pass_every_policy() {
        let colors = derive_colors(Color::from_rgb(0.5, 0.5, 0.5), 10.0);
        for policy in [ColorOverflow::Clamp, ColorOverflow::Reject, ColorOverflow::Preserve] {
            assert_eq!(colors.resolve(policy).expect("in gamut"), colors);
        }
    }
}
