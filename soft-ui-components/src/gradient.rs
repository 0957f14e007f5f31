//! Two-stop linear gradients expressed in gradient space.
//!
//! Gradient space is the unit square `[0, 1] x [0, 1]` laid over the surface
//! bounds with the origin at the top-left, so the same description works
//! for any size.
//!
//! ## Usage
//!
//! Neumorphic surfaces pick their diagonal with [`diagonal_for_direction`];
//! free-standing gradient backgrounds use [`AngledGradient`], which is backed
//! by [`vector_for_angle`].

use glam::{DVec2, Vec2};
use soft_ui::Color;

use crate::{error::StyleError, shape_def::LightDirection};

/// Angles closer than this (in degrees) to a multiple of 90 are treated as
/// exactly axis aligned.
const AXIS_SNAP_DEGREES: f64 = 1e-4;

/// A linear gradient between two colors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LinearGradient {
    /// Start and end colors.
    pub colors: [Color; 2],
    /// Stop locations along the gradient axis, always `[0, 1]`.
    pub locations: [f32; 2],
    /// Start point in gradient space.
    pub start: Vec2,
    /// End point in gradient space.
    pub end: Vec2,
    /// Corner radius of the gradient layer in pixels.
    pub corner_radius: f32,
}

impl LinearGradient {
    /// Creates a gradient running from `start` to `end`.
    pub fn new(colors: [Color; 2], (start, end): (Vec2, Vec2), corner_radius: f32) -> Self {
        Self {
            colors,
            locations: [0.0, 1.0],
            start,
            end,
            corner_radius,
        }
    }
}

/// Start and end points of the corner-to-corner diagonal for a light
/// direction. The gradient starts at the lit corner.
pub fn diagonal_for_direction(direction: LightDirection) -> (Vec2, Vec2) {
    match direction {
        LightDirection::TopLeft => (Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)),
        LightDirection::TopRight => (Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)),
        LightDirection::BottomLeft => (Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.0)),
        LightDirection::BottomRight => (Vec2::new(1.0, 1.0), Vec2::new(0.0, 0.0)),
    }
}

/// Converts an angle into gradient-space start and end points.
///
/// `angle_degrees` is measured counterclockwise from east. The direction is
/// stretched onto the boundary of the signed unit square `[-1, 1]²` so the
/// gradient spans the full box, the start point is its reflection through the
/// origin, and both are mapped into gradient space with the y axis flipped.
/// Angles within a ten-thousandth of a degree of a multiple of 90 resolve to
/// exact axis-aligned vectors.
///
/// ```
/// use glam::Vec2;
/// use soft_ui_components::gradient::vector_for_angle;
///
/// let (start, end) = vector_for_angle(90.0).unwrap();
/// assert_eq!(start, Vec2::new(0.5, 1.0));
/// assert_eq!(end, Vec2::new(0.5, 0.0));
/// ```
pub fn vector_for_angle(angle_degrees: f32) -> Result<(Vec2, Vec2), StyleError> {
    if !angle_degrees.is_finite() {
        return Err(StyleError::NonFiniteAngle(angle_degrees));
    }

    let end = point_for_angle(f64::from(angle_degrees));
    let start = -end;
    Ok((to_gradient_space(start), to_gradient_space(end)))
}

fn point_for_angle(angle_degrees: f64) -> DVec2 {
    let normalized = angle_degrees.rem_euclid(360.0);
    let quarter = normalized / 90.0;
    let nearest = quarter.round();
    if (quarter - nearest).abs() * 90.0 < AXIS_SNAP_DEGREES {
        return match nearest as i64 % 4 {
            0 => DVec2::new(1.0, 0.0),
            1 => DVec2::new(0.0, 1.0),
            2 => DVec2::new(-1.0, 0.0),
            _ => DVec2::new(0.0, -1.0),
        };
    }

    let radians = normalized.to_radians();
    let (sin, cos) = radians.sin_cos();
    if cos.abs() > sin.abs() {
        let x = cos.signum();
        DVec2::new(x, x * radians.tan())
    } else {
        let y = sin.signum();
        DVec2::new(y / radians.tan(), y)
    }
}

fn to_gradient_space(point: DVec2) -> Vec2 {
    Vec2::new(
        ((point.x + 1.0) * 0.5) as f32,
        (1.0 - (point.y + 1.0) * 0.5) as f32,
    )
}

/// A free-standing gradient background driven by an angle.
///
/// Missing colors resolve to [`Color::TRANSPARENT`]. The default angle of 270
/// degrees runs from top to bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct AngledGradient {
    /// Color at the start of the gradient.
    pub start_color: Option<Color>,
    /// Color at the end of the gradient.
    pub end_color: Option<Color>,
    /// Direction in degrees, counterclockwise from east.
    pub angle: f32,
}

impl Default for AngledGradient {
    fn default() -> Self {
        Self {
            start_color: None,
            end_color: None,
            angle: 270.0,
        }
    }
}

impl AngledGradient {
    /// Resolves the gradient for a layer with the given corner radius.
    pub fn to_gradient(&self, corner_radius: f32) -> Result<LinearGradient, StyleError> {
        let points = vector_for_angle(self.angle)?;
        let colors = [
            self.start_color.unwrap_or(Color::TRANSPARENT),
            self.end_color.unwrap_or(Color::TRANSPARENT),
        ];
        Ok(LinearGradient::new(colors, points, corner_radius))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Vec2, b: Vec2) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    #[test]
    fn test_axis_aligned_angles() {
        let cases = [
            (0.0, Vec2::new(0.0, 0.5), Vec2::new(1.0, 0.5)),
            (90.0, Vec2::new(0.5, 1.0), Vec2::new(0.5, 0.0)),
            (180.0, Vec2::new(1.0, 0.5), Vec2::new(0.0, 0.5)),
            (270.0, Vec2::new(0.5, 0.0), Vec2::new(0.5, 1.0)),
            (360.0, Vec2::new(0.0, 0.5), Vec2::new(1.0, 0.5)),
            (-90.0, Vec2::new(0.5, 0.0), Vec2::new(0.5, 1.0)),
            (450.0, Vec2::new(0.5, 1.0), Vec2::new(0.5, 0.0)),
        ];
        for (angle, start, end) in cases {
            let (s, e) = vector_for_angle(angle).expect("finite angle");
            assert_eq!((s, e), (start, end), "angle {angle}");
        }
    }

    #[test]
    fn test_near_axis_angle_snaps() {
        let (start, end) = vector_for_angle(90.000_01).expect("finite angle");
        assert_eq!(start, Vec2::new(0.5, 1.0));
        assert_eq!(end, Vec2::new(0.5, 0.0));
    }

    #[test]
    fn test_diagonal_reaches_square_corner() {
        let (start, end) = vector_for_angle(45.0).expect("finite angle");
        assert!(approx_eq(start, Vec2::new(0.0, 1.0)));
        assert!(approx_eq(end, Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn test_endpoint_lies_on_square_boundary() {
        for angle in [10.0f32, 30.0, 60.0, 100.0, 135.0, 200.0, 250.0, 300.0, 355.0] {
            let (start, end) = vector_for_angle(angle).expect("finite angle");
            for p in [start, end] {
                let on_x_edge = p.x.abs() < 1e-5 || (p.x - 1.0).abs() < 1e-5;
                let on_y_edge = p.y.abs() < 1e-5 || (p.y - 1.0).abs() < 1e-5;
                assert!(on_x_edge || on_y_edge, "angle {angle}: {p:?}");
                assert!((-1e-5..=1.0 + 1e-5).contains(&p.x));
                assert!((-1e-5..=1.0 + 1e-5).contains(&p.y));
            }
            // start and end are point reflections through the center
            assert!(approx_eq(start + end, Vec2::new(1.0, 1.0)));
        }
    }

    #[test]
    fn test_half_turn_swaps_start_and_end() {
        for angle in [0.0f32, 15.0, 45.0, 90.0, 120.0, 200.0, 270.0, 333.0] {
            let (start, end) = vector_for_angle(angle).expect("finite angle");
            let (rotated_start, rotated_end) = vector_for_angle(angle + 180.0).expect("finite");
            assert!(approx_eq(start, rotated_end), "angle {angle}");
            assert!(approx_eq(end, rotated_start), "angle {angle}");
        }
    }

    #[test]
    fn test_non_finite_angle_is_rejected() {
        assert!(matches!(
            vector_for_angle(f32::NAN),
            Err(StyleError::NonFiniteAngle(_))
        ));
        assert!(vector_for_angle(f32::INFINITY).is_err());
    }

    #[test]
    fn test_direction_diagonals_cover_all_corners() {
        let mut starts: Vec<_> = LightDirection::ALL
            .iter()
            .map(|d| diagonal_for_direction(*d).0.to_array())
            .collect();
        starts.sort_by(|a, b| a.partial_cmp(b).expect("finite"));
        assert_eq!(starts, vec![[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]]);
        for direction in LightDirection::ALL {
            let (start, end) = diagonal_for_direction(direction);
            assert_eq!(start + end, Vec2::ONE);
        }
    }

    #[test]
    fn test_angled_gradient_defaults() {
        let gradient = AngledGradient::default().to_gradient(4.0).expect("default angle");
        assert_eq!(gradient.colors, [Color::TRANSPARENT, Color::TRANSPARENT]);
        assert_eq!(gradient.start, Vec2::new(0.5, 0.0));
        assert_eq!(gradient.end, Vec2::new(0.5, 1.0));
        assert_eq!(gradient.locations, [0.0, 1.0]);
        assert_eq!(gradient.corner_radius, 4.0);

        let gradient = AngledGradient {
            start_color: Some(Color::BLACK),
            end_color: None,
            angle: 0.0,
        }
        .to_gradient(0.0)
        .expect("finite angle");
        assert_eq!(gradient.colors, [Color::BLACK, Color::TRANSPARENT]);
    }
}
