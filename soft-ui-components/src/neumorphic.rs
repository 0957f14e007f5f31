//! Neumorphic ("soft UI") surface rendering.
//!
//! A neumorphic surface shares its color with the background and is shaped
//! by light alone: a darkened shadow on the side away from the light, a
//! lightened one towards it, and optionally a gradient or inner shadows.
//!
//! ## Usage
//!
//! Describe the surface with a [`SurfaceStyle`], then call [`render`] whenever
//! the style or bounds change. The resulting [`RenderSpec`] is a complete,
//! stateless description for a compositor. Hosts that prefer push-style
//! updates wrap the style in a [`NeumorphicSurface`].
//!
//! ```
//! use soft_ui::{Color, Dp, PxSize};
//! use soft_ui_components::{
//!     neumorphic::{SurfaceStyle, render},
//!     shape_def::{LightDirection, Shape},
//! };
//!
//! let style = SurfaceStyle::default()
//!     .shape(Shape::Concave)
//!     .direction(LightDirection::TopLeft)
//!     .corner_radius(8.0)
//!     .intensity(10.0)
//!     .base_color(Color::from_rgb(0.9, 0.9, 0.9))
//!     .shadow_opacity(0.3)
//!     .shadow_blur_radius(10.0)
//!     .shadow_offset(4.0)
//!     .bounds(PxSize::new(100.0, 50.0));
//!
//! let spec = render(&style).unwrap();
//! let shadows = spec.drop_shadows.unwrap();
//! assert_eq!(shadows.dark.offset.to_f32_arr2(), [4.0, 4.0]);
//! assert_eq!(shadows.dark.blur_radius, 5.0);
//! assert!(spec.gradient.is_some());
//! assert!(spec.inner_shadows.is_empty());
//! ```

mod colors;
mod offsets;
mod surface;

use derive_setters::Setters;
use smallvec::SmallVec;
use soft_ui::{Color, Dp, PxSize};
use tracing::trace;

pub use colors::{ColorOverflow, DerivedColors, GRADIENT_OFFSET, INTENSITY_SCALE, derive_colors};
pub use offsets::{ShadowPlacement, offsets_for};
pub use surface::{Compositor, NeumorphicSurface};

use crate::{
    error::{StyleError, check_length},
    gradient::{LinearGradient, diagonal_for_direction},
    shadow::{InnerShadow, ShadowLayer, ShadowPair},
    shape_def::{LightDirection, RoundedRectPath, Shape},
};

/// Input configuration for one neumorphic surface.
#[derive(Debug, Clone, Copy, PartialEq, Setters)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SurfaceStyle {
    /// Flat, concave, convex or pressed.
    pub shape: Shape,
    /// Corner the light comes from.
    pub direction: LightDirection,
    /// Corner radius shared by every generated layer.
    #[setters(into)]
    pub corner_radius: Dp,
    /// How far shadow colors deviate from the base, on a 0-255 scale.
    pub intensity: f32,
    /// Surface and background color. Its alpha is ignored for derived colors.
    pub base_color: Color,
    /// Opacity shared by both shadows.
    pub shadow_opacity: f32,
    /// Total blur; each of the two shadow layers gets half of it.
    #[setters(into)]
    pub shadow_blur_radius: Dp,
    /// Per-axis displacement of each drop shadow.
    #[setters(into)]
    pub shadow_offset: Dp,
    /// Handling of derived colors that leave `[0, 1]`.
    pub color_overflow: ColorOverflow,
    /// Current surface size as reported by the host layout pass.
    pub bounds: PxSize,
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self {
            shape: Shape::Flat,
            direction: LightDirection::TopLeft,
            corner_radius: Dp::ZERO,
            intensity: 0.0,
            base_color: Color::WHITE,
            shadow_opacity: 0.0,
            shadow_blur_radius: Dp::ZERO,
            shadow_offset: Dp::ZERO,
            color_overflow: ColorOverflow::Clamp,
            bounds: PxSize::ZERO,
        }
    }
}

impl SurfaceStyle {
    /// Checks every numeric field before rendering.
    pub fn validate(&self) -> Result<(), StyleError> {
        check_length("corner_radius", self.corner_radius)?;
        check_length("shadow_blur_radius", self.shadow_blur_radius)?;
        check_length("shadow_offset", self.shadow_offset)?;

        if !self.intensity.is_finite() {
            return Err(StyleError::NonFinite { field: "intensity" });
        }
        if !self.base_color.to_array().iter().all(|c| c.is_finite()) {
            return Err(StyleError::NonFinite {
                field: "base_color",
            });
        }
        if !(0.0..=1.0).contains(&self.shadow_opacity) {
            return Err(StyleError::OpacityOutOfRange(self.shadow_opacity));
        }
        for (field, value) in [
            ("bounds.width", self.bounds.width),
            ("bounds.height", self.bounds.height),
        ] {
            if !value.is_finite() {
                return Err(StyleError::NonFinite { field });
            }
            if value < 0.0 {
                return Err(StyleError::NegativeLength {
                    field,
                    value: f64::from(value),
                });
            }
        }
        Ok(())
    }

    /// Blur radius applied to each individual shadow layer, in pixels.
    pub fn layer_blur_radius(&self) -> f32 {
        (self.shadow_blur_radius / 2.0).to_pixels_f32()
    }
}

/// Everything a compositor needs to draw one neumorphic surface.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RenderSpec {
    /// Size the spec was computed for.
    pub bounds: PxSize,
    /// Outline of the surface itself, filled with `fill`.
    pub surface: RoundedRectPath,
    /// Fill color of the surface.
    pub fill: Color,
    /// Colors derived from the base color, after overflow handling.
    pub colors: DerivedColors,
    /// Mirrored drop shadows; absent for pressed surfaces.
    pub drop_shadows: Option<ShadowPair>,
    /// Background gradient for concave and convex surfaces.
    pub gradient: Option<LinearGradient>,
    /// Inner shadows for pressed surfaces, dark first.
    pub inner_shadows: SmallVec<[InnerShadow; 2]>,
}

/// Computes the render spec for a surface.
///
/// Every call is a full recomputation from `style`; identical styles yield
/// identical specs.
pub fn render(style: &SurfaceStyle) -> Result<RenderSpec, StyleError> {
    style.validate()?;
    trace!(shape = ?style.shape, direction = ?style.direction, "rendering neumorphic surface");

    let colors = derive_colors(style.base_color, style.intensity).resolve(style.color_overflow)?;
    let corner_radius = style.corner_radius.to_pixels_f32();
    let path = RoundedRectPath::for_bounds(style.bounds, corner_radius);
    let blur_radius = style.layer_blur_radius();
    let opacity = style.shadow_opacity;

    let mut drop_shadows = None;
    let mut inner_shadows = SmallVec::new();
    match offsets_for(
        style.shape,
        style.direction,
        style.shadow_offset.to_pixels_f32(),
    ) {
        ShadowPlacement::Offsets { dark, light } => {
            let layer = |color, offset| ShadowLayer {
                path,
                color,
                offset,
                blur_radius,
                opacity,
            };
            drop_shadows = Some(ShadowPair {
                dark: layer(colors.shadow_dark, dark),
                light: layer(colors.shadow_light, light),
            });
        }
        ShadowPlacement::InnerEdges { dark, light } => {
            for (edges, color) in [(dark, colors.shadow_dark), (light, colors.shadow_light)] {
                inner_shadows.push(InnerShadow {
                    edges,
                    color,
                    blur_radius,
                    opacity,
                    corner_radius,
                });
            }
        }
    }

    let gradient_colors = match style.shape {
        Shape::Concave => Some([colors.gradient_dark, colors.gradient_light]),
        Shape::Convex => Some([colors.gradient_light, colors.gradient_dark]),
        Shape::Flat | Shape::Pressed => None,
    };
    let gradient = gradient_colors.map(|stops| {
        LinearGradient::new(stops, diagonal_for_direction(style.direction), corner_radius)
    });

    Ok(RenderSpec {
        bounds: style.bounds,
        surface: path,
        fill: style.base_color,
        colors,
        drop_shadows,
        gradient,
        inner_shadows,
    })
}
