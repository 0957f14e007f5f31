//! Plain view decoration: corner rounding, border and a single drop shadow.
//!
//! ## Usage
//!
//! One [`ViewDecoration`] value styles any rectangular widget (containers,
//! buttons, images, labels, lists, text fields, pickers). Resolve it against
//! the laid-out bounds to get a [`DecorationSpec`] for the compositor.
//!
//! ```
//! use soft_ui::PxSize;
//! use soft_ui_components::decoration::ViewDecoration;
//!
//! let avatar = ViewDecoration::circular().resolve(PxSize::new(48.0, 48.0)).unwrap();
//! assert_eq!(avatar.path.corner_radius, 24.0);
//! assert!(avatar.masks_to_bounds);
//! ```

use derive_setters::Setters;
use soft_ui::{Color, Dp, PxPosition, PxSize};

use crate::{
    error::{StyleError, check_length},
    shape_def::RoundedRectPath,
};

/// Blur radius used when a decoration leaves the shadow radius unset.
pub const DEFAULT_SHADOW_RADIUS: f32 = 3.0;

/// Declarative styling shared by every decorated widget.
#[derive(Debug, Clone, Copy, PartialEq, Setters)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ViewDecoration {
    /// Corner radius; ignored when `circle` is set.
    #[setters(into)]
    pub corner_radius: Dp,
    /// Round the view into a circle with radius `width / 2`.
    pub circle: bool,
    /// Border color.
    pub border_color: Color,
    /// Border width; no border is drawn at zero.
    #[setters(into)]
    pub border_width: Dp,
    /// Shadow color; a fully transparent color disables the shadow.
    pub shadow_color: Color,
    /// Shadow opacity.
    pub shadow_opacity: f32,
    /// Shadow blur radius; `None` uses [`DEFAULT_SHADOW_RADIUS`].
    #[setters(strip_option, into)]
    pub shadow_radius: Option<Dp>,
    /// Shadow displacement in points.
    pub shadow_offset: PxPosition,
    /// Clip content to the rounded outline. A clipped view casts no shadow.
    pub masks_to_bounds: bool,
}

impl Default for ViewDecoration {
    fn default() -> Self {
        Self {
            corner_radius: Dp::ZERO,
            circle: false,
            border_color: Color::TRANSPARENT,
            border_width: Dp::ZERO,
            shadow_color: Color::TRANSPARENT,
            shadow_opacity: 1.0,
            shadow_radius: None,
            shadow_offset: PxPosition::new(0.0, 1.0),
            masks_to_bounds: false,
        }
    }
}

/// A resolved border stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Border {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

/// A resolved drop shadow of a decorated view.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecorationShadow {
    /// Shadow color.
    pub color: Color,
    /// Shadow opacity.
    pub opacity: f32,
    /// Displacement in pixels.
    pub offset: PxPosition,
    /// Blur radius in pixels.
    pub blur_radius: f32,
}

/// What a compositor draws for a decorated view.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecorationSpec {
    /// Rounded outline of the view.
    pub path: RoundedRectPath,
    /// Border, if any.
    pub border: Option<Border>,
    /// Drop shadow, if any.
    pub shadow: Option<DecorationShadow>,
    /// Whether content is clipped to `path`.
    pub masks_to_bounds: bool,
}

impl ViewDecoration {
    /// Light gray shadow down and to the left, used on cards.
    pub fn light_shadow(corner_radius: impl Into<Dp>, opacity: f32) -> Self {
        Self::default()
            .corner_radius(corner_radius)
            .shadow_color(Color::LIGHT_GRAY)
            .shadow_offset(PxPosition::new(-0.5, 0.5))
            .shadow_opacity(opacity)
    }

    /// Faint shadow with a thin navy border.
    pub fn bordered_shadow() -> Self {
        Self::default()
            .shadow_color(Color::LIGHT_GRAY)
            .shadow_offset(PxPosition::new(-0.2, 0.2))
            .shadow_opacity(0.2)
            .border_width(1.0)
            .border_color(Color::from_rgb(0.05, 0.08, 0.27))
    }

    /// Rounded frame with a thin white border, clipped.
    pub fn framed() -> Self {
        Self::default()
            .corner_radius(6.0)
            .border_width(1.0)
            .border_color(Color::WHITE)
            .masks_to_bounds(true)
    }

    /// Crisp dark shadow under a header bar.
    pub fn header_shadow() -> Self {
        Self::default()
            .shadow_color(Color::from_rgb(0.2605, 0.2605, 0.2605))
            .shadow_offset(PxPosition::new(0.0, 2.0))
            .shadow_opacity(1.0)
            .shadow_radius(1.0)
    }

    /// Circular clip with an invisible 2pt border.
    pub fn circular() -> Self {
        Self::default()
            .circle(true)
            .border_width(2.0)
            .border_color(Color::TRANSPARENT)
            .masks_to_bounds(true)
    }

    /// Checks lengths and opacity.
    pub fn validate(&self) -> Result<(), StyleError> {
        check_length("corner_radius", self.corner_radius)?;
        check_length("border_width", self.border_width)?;
        if let Some(radius) = self.shadow_radius {
            check_length("shadow_radius", radius)?;
        }
        if !(0.0..=1.0).contains(&self.shadow_opacity) {
            return Err(StyleError::OpacityOutOfRange(self.shadow_opacity));
        }
        Ok(())
    }

    /// Resolves the decoration for a view of size `bounds`.
    pub fn resolve(&self, bounds: PxSize) -> Result<DecorationSpec, StyleError> {
        self.validate()?;

        let corner_radius = if self.circle {
            bounds.width / 2.0
        } else {
            self.corner_radius.to_pixels_f32()
        };
        let border_width = self.border_width.to_pixels_f32();
        let border = (border_width > 0.0).then_some(Border {
            color: self.border_color,
            width: border_width,
        });
        let casts_shadow =
            !self.masks_to_bounds && self.shadow_color.a > 0.0 && self.shadow_opacity > 0.0;
        let shadow = casts_shadow.then(|| {
            DecorationShadow {
                color: self.shadow_color,
                opacity: self.shadow_opacity,
                offset: self.shadow_offset,
                blur_radius: self
                    .shadow_radius
                    .map_or(DEFAULT_SHADOW_RADIUS, |radius| radius.to_pixels_f32()),
            }
        });

        Ok(DecorationSpec {
            path: RoundedRectPath::for_bounds(bounds, corner_radius),
            border,
            shadow,
            masks_to_bounds: self.masks_to_bounds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draws_nothing_extra() {
        let spec = ViewDecoration::default()
            .resolve(PxSize::new(10.0, 10.0))
            .expect("defaults are valid");
        assert_eq!(spec.path.corner_radius, 0.0);
        assert!(spec.border.is_none());
        assert!(spec.shadow.is_none());
        assert!(!spec.masks_to_bounds);
    }

    #[test]
    fn test_circle_uses_half_width() {
        let spec = ViewDecoration::default()
            .corner_radius(4.0)
            .circle(true)
            .resolve(PxSize::new(80.0, 40.0))
            .expect("valid");
        assert_eq!(spec.path.corner_radius, 40.0);
    }

    #[test]
    fn test_circle_preset_keeps_clear_border() {
        let spec = ViewDecoration::circular()
            .resolve(PxSize::new(30.0, 30.0))
            .expect("valid");
        assert_eq!(
            spec.border,
            Some(Border {
                color: Color::TRANSPARENT,
                width: 2.0
            })
        );
    }

    #[test]
    fn test_light_shadow_preset() {
        let spec = ViewDecoration::light_shadow(20.0, 0.6)
            .resolve(PxSize::new(100.0, 60.0))
            .expect("valid");
        let shadow = spec.shadow.expect("shadow");
        assert_eq!(shadow.offset, PxPosition::new(-0.5, 0.5));
        assert_eq!(shadow.opacity, 0.6);
        assert_eq!(shadow.blur_radius, DEFAULT_SHADOW_RADIUS);
        assert_eq!(spec.path.corner_radius, 20.0);
    }

    #[test]
    fn test_header_and_bordered_presets() {
        let header = ViewDecoration::header_shadow()
            .resolve(PxSize::new(320.0, 44.0))
            .expect("valid");
        let shadow = header.shadow.expect("shadow");
        assert_eq!(shadow.blur_radius, 1.0);
        assert_eq!(shadow.offset, PxPosition::new(0.0, 2.0));

        let bordered = ViewDecoration::bordered_shadow()
            .resolve(PxSize::new(320.0, 44.0))
            .expect("valid");
        assert_eq!(bordered.border.map(|b| b.width), Some(1.0));
        assert_eq!(bordered.shadow.map(|s| s.opacity), Some(0.2));

        let framed = ViewDecoration::framed()
            .resolve(PxSize::new(320.0, 44.0))
            .expect("valid");
        assert_eq!(framed.path.corner_radius, 6.0);
        assert!(framed.masks_to_bounds);
        assert!(framed.shadow.is_none());
    }

    #[test]
    fn test_circle_flag_and_preset_coexist() {
        let flagged = ViewDecoration::default().circle(true);
        assert!(flagged.circle);
        assert!(ViewDecoration::circular().circle);
        assert_eq!(
            flagged.resolve(PxSize::new(20.0, 20.0)).expect("valid").path.corner_radius,
            ViewDecoration::circular()
                .resolve(PxSize::new(20.0, 20.0))
                .expect("valid")
                .path
                .corner_radius
        );
    }

    #[test]
    fn test_masking_suppresses_shadow() {
        let clipped = ViewDecoration::framed()
            .shadow_color(Color::LIGHT_GRAY)
            .resolve(PxSize::new(100.0, 40.0))
            .expect("valid");
        assert!(clipped.masks_to_bounds);
        assert!(clipped.shadow.is_none());

        let unclipped = ViewDecoration::framed()
            .shadow_color(Color::LIGHT_GRAY)
            .masks_to_bounds(false)
            .resolve(PxSize::new(100.0, 40.0))
            .expect("valid");
        assert!(unclipped.shadow.is_some());
    }

    #[test]
    fn test_invalid_decoration() {
        assert!(matches!(
            ViewDecoration::default()
                .border_width(-1.0)
                .resolve(PxSize::new(1.0, 1.0)),
            Err(StyleError::NegativeLength {
                field: "border_width",
                ..
            })
        ));
        assert!(matches!(
            ViewDecoration::default()
                .shadow_opacity(-0.1)
                .resolve(PxSize::new(1.0, 1.0)),
            Err(StyleError::OpacityOutOfRange(_))
        ));
        assert!(matches!(
            ViewDecoration::default()
                .shadow_radius(f64::NAN)
                .resolve(PxSize::new(1.0, 1.0)),
            Err(StyleError::NonFinite {
                field: "shadow_radius"
            })
        ));
    }
}
