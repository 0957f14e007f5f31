//! Defines the [`Shape`] and [`LightDirection`] enums that select how a
//! neumorphic surface is lit, and [`RoundedRectPath`], the outline every
//! generated layer shares.
//!
//! Both enums mirror inspector-style integer properties: [`Shape::from_raw`]
//! and [`LightDirection::from_raw`] accept any integer and fall back to
//! [`Shape::Flat`] / [`LightDirection::TopLeft`] for values outside `0..=3`.

use soft_ui::{PxRect, PxSize};

/// How a neumorphic surface appears relative to its background.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum Shape {
    /// Flush with the background: paired drop shadows only.
    #[default]
    Flat,
    /// Inset: paired drop shadows plus a dark-to-light gradient.
    Concave,
    /// Extruded: paired drop shadows plus a light-to-dark gradient.
    Convex,
    /// Depressed: two inner shadows, no drop shadows and no gradient.
    Pressed,
}

impl Shape {
    /// All shapes in raw-value order.
    pub const ALL: [Shape; 4] = [Shape::Flat, Shape::Concave, Shape::Convex, Shape::Pressed];

    /// Maps an inspector index to a shape, failing closed to [`Shape::Flat`].
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            0 => Shape::Flat,
            1 => Shape::Concave,
            2 => Shape::Convex,
            3 => Shape::Pressed,
            other => {
                tracing::debug!("shape index {other} out of range, falling back to flat");
                Shape::Flat
            }
        }
    }

    /// The inspector index of this shape.
    pub fn raw(self) -> i64 {
        self as i64
    }

    /// Parses a snake_case shape name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "flat" => Some(Shape::Flat),
            "concave" => Some(Shape::Concave),
            "convex" => Some(Shape::Convex),
            "pressed" => Some(Shape::Pressed),
            _ => None,
        }
    }
}

/// The corner the light source shines from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum LightDirection {
    /// Light from the top-left corner.
    #[default]
    TopLeft,
    /// Light from the top-right corner.
    TopRight,
    /// Light from the bottom-left corner.
    BottomLeft,
    /// Light from the bottom-right corner.
    BottomRight,
}

impl LightDirection {
    /// All directions in raw-value order.
    pub const ALL: [LightDirection; 4] = [
        LightDirection::TopLeft,
        LightDirection::TopRight,
        LightDirection::BottomLeft,
        LightDirection::BottomRight,
    ];

    /// Maps an inspector index to a direction, failing closed to
    /// [`LightDirection::TopLeft`].
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            0 => LightDirection::TopLeft,
            1 => LightDirection::TopRight,
            2 => LightDirection::BottomLeft,
            3 => LightDirection::BottomRight,
            other => {
                tracing::debug!("direction index {other} out of range, falling back to top_left");
                LightDirection::TopLeft
            }
        }
    }

    /// The inspector index of this direction.
    pub fn raw(self) -> i64 {
        self as i64
    }

    /// Parses a snake_case direction name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "top_left" => Some(LightDirection::TopLeft),
            "top_right" => Some(LightDirection::TopRight),
            "bottom_left" => Some(LightDirection::BottomLeft),
            "bottom_right" => Some(LightDirection::BottomRight),
            _ => None,
        }
    }

    /// The diagonally opposite corner.
    pub fn opposite(self) -> Self {
        match self {
            LightDirection::TopLeft => LightDirection::BottomRight,
            LightDirection::TopRight => LightDirection::BottomLeft,
            LightDirection::BottomLeft => LightDirection::TopRight,
            LightDirection::BottomRight => LightDirection::TopLeft,
        }
    }
}

#[cfg(feature = "serde")]
mod de {
    use serde::{Deserialize, Deserializer, de::Error};

    use super::{LightDirection, Shape};

    /// Either the inspector integer or the snake_case name.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawOrName {
        Raw(i64),
        Name(String),
    }

    impl<'de> Deserialize<'de> for Shape {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            match RawOrName::deserialize(deserializer)? {
                RawOrName::Raw(raw) => Ok(Shape::from_raw(raw)),
                RawOrName::Name(name) => Shape::from_name(&name)
                    .ok_or_else(|| D::Error::custom(format!("unknown shape `{name}`"))),
            }
        }
    }

    impl<'de> Deserialize<'de> for LightDirection {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            match RawOrName::deserialize(deserializer)? {
                RawOrName::Raw(raw) => Ok(LightDirection::from_raw(raw)),
                RawOrName::Name(name) => LightDirection::from_name(&name)
                    .ok_or_else(|| D::Error::custom(format!("unknown light direction `{name}`"))),
            }
        }
    }
}

/// A rounded rectangle outline in local pixel space.
///
/// Every shadow path, the gradient layer and the inner shadows of one surface
/// share the same corner radius.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RoundedRectPath {
    /// Bounding rectangle, anchored at the surface origin.
    pub rect: PxRect,
    /// Corner radius in pixels.
    pub corner_radius: f32,
}

impl RoundedRectPath {
    /// Builds the path for a surface of the given size.
    pub fn for_bounds(bounds: PxSize, corner_radius: f32) -> Self {
        Self {
            rect: PxRect::from_size(bounds),
            corner_radius,
        }
    }
}
