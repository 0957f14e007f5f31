//! Maps a light direction to shadow displacements or inner-shadow edges.

use soft_ui::PxPosition;

use crate::{
    shadow::EdgeSet,
    shape_def::{LightDirection, Shape},
};

/// Where the two shadows of a surface go.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShadowPlacement {
    /// Drop shadow displacements for flat, concave and convex surfaces.
    /// The two offsets are always negatives of each other.
    Offsets {
        /// Offset of the dark shadow.
        dark: PxPosition,
        /// Offset of the light shadow.
        light: PxPosition,
    },
    /// Inner-shadow edges for pressed surfaces. The two sets partition the
    /// four edges.
    InnerEdges {
        /// Edges receiving the dark inner shadow.
        dark: EdgeSet,
        /// Edges receiving the light inner shadow.
        light: EdgeSet,
    },
}

/// Unit displacement of the dark shadow, away from the light.
fn dark_offset_sign(direction: LightDirection) -> (f32, f32) {
    match direction {
        LightDirection::TopLeft => (1.0, 1.0),
        LightDirection::TopRight => (-1.0, 1.0),
        LightDirection::BottomLeft => (1.0, -1.0),
        LightDirection::BottomRight => (-1.0, -1.0),
    }
}

/// The two edges meeting at a corner.
fn corner_edges(direction: LightDirection) -> EdgeSet {
    match direction {
        LightDirection::TopLeft => EdgeSet::TOP_LEFT,
        LightDirection::TopRight => EdgeSet::TOP_RIGHT,
        LightDirection::BottomLeft => EdgeSet::BOTTOM_LEFT,
        LightDirection::BottomRight => EdgeSet::BOTTOM_RIGHT,
    }
}

/// Places the two shadows of a surface lit from `direction`.
///
/// `magnitude` is the per-axis displacement in pixels and is ignored for
/// [`Shape::Pressed`], whose dark inner shadow hugs the edges meeting at the
/// lit corner while the light one takes the remaining two.
pub fn offsets_for(shape: Shape, direction: LightDirection, magnitude: f32) -> ShadowPlacement {
    match shape {
        Shape::Flat | Shape::Concave | Shape::Convex => {
            let (sx, sy) = dark_offset_sign(direction);
            let dark = PxPosition::new(sx * magnitude, sy * magnitude);
            ShadowPlacement::Offsets { dark, light: -dark }
        }
        Shape::Pressed => ShadowPlacement::InnerEdges {
            dark: corner_edges(direction),
            light: corner_edges(direction.opposite()),
        },
    }
}
