//! Push-style binding between a host layout system and a compositor.

use soft_ui::{Color, Dp, PxSize};
use tracing::debug;

use super::{RenderSpec, SurfaceStyle, render};
use crate::{
    error::StyleError,
    shape_def::{LightDirection, Shape},
};

/// Consumer of render specs, typically the host's layer tree.
pub trait Compositor {
    /// Replaces whatever was drawn for the surface with `spec`.
    fn apply_render_spec(&mut self, spec: &RenderSpec);
}

impl<F: FnMut(&RenderSpec)> Compositor for F {
    fn apply_render_spec(&mut self, spec: &RenderSpec) {
        self(spec)
    }
}

/// A neumorphic surface owned by one view.
///
/// The host calls [`notify_bounds_changed`](Self::notify_bounds_changed) from
/// its layout pass and mutates the style through
/// [`notify_style_changed`](Self::notify_style_changed) or the inspector
/// setters. Each accepted change re-renders from scratch and hands the spec to
/// the compositor. Until the first layout pass nothing is rendered.
///
/// Every style is checked with a full [`render`], even before layout, so a
/// stored style is always renderable. A change that fails is discarded: the
/// style stays as it was and the compositor keeps the last good spec.
pub struct NeumorphicSurface<C> {
    style: SurfaceStyle,
    compositor: C,
    last_spec: Option<RenderSpec>,
    laid_out: bool,
}

impl<C: Compositor> NeumorphicSurface<C> {
    /// Creates a surface that has not been laid out yet.
    ///
    /// Fails if `style` could not be rendered, including derived colors
    /// rejected by its overflow policy.
    pub fn new(style: SurfaceStyle, compositor: C) -> Result<Self, StyleError> {
        render(&style)?;
        Ok(Self {
            style,
            compositor,
            last_spec: None,
            laid_out: false,
        })
    }

    /// The current style.
    pub fn style(&self) -> &SurfaceStyle {
        &self.style
    }

    /// The last spec handed to the compositor.
    pub fn last_spec(&self) -> Option<&RenderSpec> {
        self.last_spec.as_ref()
    }

    /// Shared access to the compositor.
    pub fn compositor(&self) -> &C {
        &self.compositor
    }

    /// Consumes the surface, returning its compositor.
    pub fn into_compositor(self) -> C {
        self.compositor
    }

    /// Layout callback. Re-renders when `bounds` differ from the stored ones
    /// or on the first call, and returns whether a render happened.
    pub fn notify_bounds_changed(&mut self, bounds: PxSize) -> Result<bool, StyleError> {
        if self.laid_out && self.style.bounds == bounds {
            return Ok(false);
        }
        debug!(
            width = bounds.width,
            height = bounds.height,
            "neumorphic surface bounds changed"
        );
        let style = self.style.bounds(bounds);
        self.commit(style)?;
        self.laid_out = true;
        Ok(true)
    }

    /// Applies `change` to the style and re-renders if the surface has been
    /// laid out.
    pub fn notify_style_changed(
        &mut self,
        change: impl FnOnce(&mut SurfaceStyle),
    ) -> Result<(), StyleError> {
        let mut style = self.style;
        change(&mut style);
        if style == self.style {
            return Ok(());
        }
        debug!(shape = ?style.shape, direction = ?style.direction, "neumorphic style changed");
        if self.laid_out {
            self.commit(style)
        } else {
            render(&style)?;
            self.style = style;
            Ok(())
        }
    }

    fn commit(&mut self, style: SurfaceStyle) -> Result<(), StyleError> {
        let spec = render(&style)?;
        self.style = style;
        self.compositor.apply_render_spec(&spec);
        self.last_spec = Some(spec);
        Ok(())
    }

    /// Inspector setter for the shape; out-of-range indices select flat.
    pub fn set_shape_index(&mut self, index: i64) -> Result<(), StyleError> {
        self.notify_style_changed(|style| style.shape = Shape::from_raw(index))
    }

    /// Inspector setter for the light direction; out-of-range indices select
    /// top-left.
    pub fn set_direction_index(&mut self, index: i64) -> Result<(), StyleError> {
        self.notify_style_changed(|style| style.direction = LightDirection::from_raw(index))
    }

    /// Sets the corner radius.
    pub fn set_corner_radius(&mut self, radius: impl Into<Dp>) -> Result<(), StyleError> {
        let radius = radius.into();
        self.notify_style_changed(|style| style.corner_radius = radius)
    }

    /// Sets the intensity (0-255 scale).
    pub fn set_intensity(&mut self, intensity: f32) -> Result<(), StyleError> {
        self.notify_style_changed(|style| style.intensity = intensity)
    }

    /// Sets the base (background) color.
    pub fn set_base_color(&mut self, color: Color) -> Result<(), StyleError> {
        self.notify_style_changed(|style| style.base_color = color)
    }

    /// Sets the opacity shared by both shadows.
    pub fn set_shadow_opacity(&mut self, opacity: f32) -> Result<(), StyleError> {
        self.notify_style_changed(|style| style.shadow_opacity = opacity)
    }

    /// Sets the total shadow blur; each layer receives half.
    pub fn set_shadow_radius(&mut self, radius: impl Into<Dp>) -> Result<(), StyleError> {
        let radius = radius.into();
        self.notify_style_changed(|style| style.shadow_blur_radius = radius)
    }

    /// The total shadow blur, twice the per-layer radius.
    pub fn shadow_radius(&self) -> Dp {
        self.style.shadow_blur_radius
    }

    /// Sets the per-axis drop shadow displacement.
    pub fn set_offset(&mut self, offset: impl Into<Dp>) -> Result<(), StyleError> {
        let offset = offset.into();
        self.notify_style_changed(|style| style.shadow_offset = offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{neumorphic::ColorOverflow, shadow::EdgeSet};

    #[derive(Default)]
    struct RecordingCompositor {
        applied: Vec<RenderSpec>,
    }

    impl Compositor for RecordingCompositor {
        fn apply_render_spec(&mut self, spec: &RenderSpec) {
            self.applied.push(spec.clone());
        }
    }

    fn surface() -> NeumorphicSurface<RecordingCompositor> {
        let style = SurfaceStyle::default()
            .shape(Shape::Convex)
            .corner_radius(12.0)
            .intensity(12.0)
            .base_color(Color::from_rgb(0.88, 0.9, 0.93))
            .shadow_opacity(0.5)
            .shadow_blur_radius(8.0)
            .shadow_offset(3.0);
        NeumorphicSurface::new(style, RecordingCompositor::default()).expect("valid style")
    }

    #[test]
    fn test_first_layout_renders() {
        let mut surface = surface();
        assert!(surface.last_spec().is_none());
        assert!(surface
            .notify_bounds_changed(PxSize::new(200.0, 80.0))
            .expect("valid bounds"));
        assert_eq!(surface.compositor().applied.len(), 1);
        assert_eq!(
            surface.last_spec().map(|spec| spec.bounds),
            Some(PxSize::new(200.0, 80.0))
        );
    }

    #[test]
    fn test_unchanged_bounds_skip_render() {
        let mut surface = surface();
        surface
            .notify_bounds_changed(PxSize::new(200.0, 80.0))
            .expect("valid bounds");
        assert!(!surface
            .notify_bounds_changed(PxSize::new(200.0, 80.0))
            .expect("valid bounds"));
        assert!(surface
            .notify_bounds_changed(PxSize::new(210.0, 80.0))
            .expect("valid bounds"));
        assert_eq!(surface.compositor().applied.len(), 2);
    }

    #[test]
    fn test_style_changes_before_layout_do_not_render() {
        let mut surface = surface();
        surface.set_shape_index(3).expect("valid shape");
        assert_eq!(surface.style().shape, Shape::Pressed);
        assert!(surface.compositor().applied.is_empty());

        surface
            .notify_bounds_changed(PxSize::new(50.0, 50.0))
            .expect("valid bounds");
        let spec = surface.last_spec().expect("rendered");
        assert_eq!(spec.inner_shadows.len(), 2);
    }

    #[test]
    fn test_style_changes_after_layout_render() {
        let mut surface = surface();
        surface
            .notify_bounds_changed(PxSize::new(50.0, 50.0))
            .expect("valid bounds");
        surface.set_direction_index(3).expect("valid direction");
        surface.set_shape_index(3).expect("valid shape");
        let spec = surface.last_spec().expect("rendered");
        assert_eq!(spec.inner_shadows[0].edges, EdgeSet::BOTTOM_RIGHT);
        assert_eq!(surface.compositor().applied.len(), 3);

        // no-op change does not re-render
        surface.set_shape_index(3).expect("valid shape");
        assert_eq!(surface.compositor().applied.len(), 3);
    }

    #[test]
    fn test_invalid_change_keeps_last_good_state() {
        let mut surface = surface();
        surface
            .notify_bounds_changed(PxSize::new(50.0, 50.0))
            .expect("valid bounds");
        let before = surface.last_spec().cloned();

        assert!(surface.set_shadow_opacity(2.0).is_err());
        assert_eq!(surface.style().shadow_opacity, 0.5);
        assert_eq!(surface.last_spec().cloned(), before);
        assert_eq!(surface.compositor().applied.len(), 1);

        assert!(surface.set_corner_radius(-4.0).is_err());
        assert_eq!(surface.style().corner_radius, Dp(12.0));
    }

    #[test]
    fn test_shadow_radius_is_total_blur() {
        let mut surface = surface();
        surface.set_shadow_radius(20.0).expect("valid radius");
        surface
            .notify_bounds_changed(PxSize::new(50.0, 50.0))
            .expect("valid bounds");
        assert_eq!(surface.shadow_radius(), Dp(20.0));
        let spec = surface.last_spec().expect("rendered");
        let shadows = spec.drop_shadows.expect("convex has drop shadows");
        assert_eq!(shadows.dark.blur_radius, 10.0);
    }

    #[test]
    fn test_setters_route_through_render() {
        let mut surface = surface();
        surface
            .notify_bounds_changed(PxSize::new(50.0, 50.0))
            .expect("valid bounds");
        surface.set_offset(6.0).expect("valid offset");
        surface.set_intensity(20.0).expect("valid intensity");
        surface
            .set_base_color(Color::from_rgb(0.5, 0.5, 0.5))
            .expect("valid color");
        let spec = surface.last_spec().expect("rendered");
        let shadows = spec.drop_shadows.expect("convex has drop shadows");
        assert_eq!(shadows.dark.offset.to_f32_arr2(), [6.0, 6.0]);
        assert!((shadows.dark.color.r - (0.5 - 20.0 / 255.0)).abs() < 1e-6);
        assert_eq!(surface.compositor().applied.len(), 4);
    }

    #[test]
    fn test_closure_compositor() {
        let mut count = 0;
        {
            let mut surface = NeumorphicSurface::new(SurfaceStyle::default(), |_: &RenderSpec| {
                count += 1
            })
            .expect("defaults are valid");
            surface
                .notify_bounds_changed(PxSize::new(10.0, 10.0))
                .expect("valid bounds");
        }
        assert_eq!(count, 1);
    }

    fn rejecting_style() -> SurfaceStyle {
        SurfaceStyle::default()
            .intensity(10.0)
            .base_color(Color::from_rgb(0.1, 0.1, 0.1))
            .shadow_opacity(0.5)
            .color_overflow(ColorOverflow::Reject)
    }

    #[test]
    fn test_overflowing_change_before_layout_is_discarded() {
        let mut surface =
            NeumorphicSurface::new(rejecting_style(), RecordingCompositor::default())
                .expect("in gamut");

        assert!(matches!(
            surface.set_intensity(300.0),
            Err(StyleError::ChannelOutOfRange { .. })
        ));
        assert_eq!(surface.style().intensity, 10.0);

        // the stored style still renders on first layout
        assert!(surface
            .notify_bounds_changed(PxSize::new(40.0, 40.0))
            .expect("stored style is renderable"));
        assert_eq!(surface.compositor().applied.len(), 1);
    }

    #[test]
    fn test_new_rejects_unrenderable_style() {
        assert!(matches!(
            NeumorphicSurface::new(
                rejecting_style().intensity(300.0),
                RecordingCompositor::default()
            ),
            Err(StyleError::ChannelOutOfRange { .. })
        ));
        assert!(matches!(
            NeumorphicSurface::new(
                SurfaceStyle::default().shadow_opacity(-1.0),
                RecordingCompositor::default()
            ),
            Err(StyleError::OpacityOutOfRange(_))
        ));
    }
}
