//! Drop-shadow and inner-shadow descriptions for neumorphic surfaces.
//!
//! ## Usage
//!
//! The renderer fills these in; compositors read them verbatim. Drop shadows
//! come in a dark/light [`ShadowPair`], inner shadows carry the [`EdgeSet`]
//! they darken or lighten.

use soft_ui::{Color, PxPosition, PxRect, PxSize};

use crate::shape_def::RoundedRectPath;

/// A single drop shadow cast by the surface outline.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShadowLayer {
    /// Outline casting the shadow.
    pub path: RoundedRectPath,
    /// Color of the shadow (RGBA).
    pub color: Color,
    /// Displacement of the shadow from the surface.
    pub offset: PxPosition,
    /// Blur radius in pixels.
    pub blur_radius: f32,
    /// Shadow opacity in `[0, 1]`.
    pub opacity: f32,
}

/// The two mirrored drop shadows of a flat, concave or convex surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShadowPair {
    /// Darkened shadow, displaced away from the light.
    pub dark: ShadowLayer,
    /// Lightened highlight, displaced towards the light.
    pub light: ShadowLayer,
}

impl ShadowPair {
    /// The layers in paint order (dark first).
    pub fn layers(&self) -> [&ShadowLayer; 2] {
        [&self.dark, &self.light]
    }
}

/// One side of a rectangular surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Edge {
    /// The top side.
    Top,
    /// The left side.
    Left,
    /// The bottom side.
    Bottom,
    /// The right side.
    Right,
}

impl Edge {
    /// All edges in clockwise order starting at the top.
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    const fn bit(self) -> u8 {
        match self {
            Edge::Top => 0b0001,
            Edge::Left => 0b0010,
            Edge::Bottom => 0b0100,
            Edge::Right => 0b1000,
        }
    }
}

/// A set of surface edges receiving an inner shadow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "Vec<Edge>", from = "Vec<Edge>")
)]
pub struct EdgeSet(u8);

impl EdgeSet {
    /// No edges.
    pub const NONE: Self = Self(0);
    /// Every edge.
    pub const ALL: Self = Self(0b1111);
    /// Top and left.
    pub const TOP_LEFT: Self = Self(Edge::Top.bit() | Edge::Left.bit());
    /// Top and right.
    pub const TOP_RIGHT: Self = Self(Edge::Top.bit() | Edge::Right.bit());
    /// Bottom and left.
    pub const BOTTOM_LEFT: Self = Self(Edge::Bottom.bit() | Edge::Left.bit());
    /// Bottom and right.
    pub const BOTTOM_RIGHT: Self = Self(Edge::Bottom.bit() | Edge::Right.bit());

    /// A set holding a single edge.
    pub const fn only(edge: Edge) -> Self {
        Self(edge.bit())
    }

    /// Every edge except `edge`.
    pub const fn except(edge: Edge) -> Self {
        Self(Self::ALL.0 & !edge.bit())
    }

    /// Whether `edge` is in the set.
    pub const fn contains(self, edge: Edge) -> bool {
        self.0 & edge.bit() != 0
    }

    /// Edges in either set.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Edges not in this set.
    pub const fn complement(self) -> Self {
        Self(Self::ALL.0 & !self.0)
    }

    /// Whether the two sets share no edge.
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    /// Number of edges in the set.
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Whether the set is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the contained edges in clockwise order.
    pub fn iter(self) -> impl Iterator<Item = Edge> {
        Edge::ALL.into_iter().filter(move |edge| self.contains(*edge))
    }
}

impl From<Edge> for EdgeSet {
    fn from(edge: Edge) -> Self {
        Self::only(edge)
    }
}

impl From<Vec<Edge>> for EdgeSet {
    fn from(edges: Vec<Edge>) -> Self {
        edges.into_iter().fold(Self::NONE, |set, edge| set.union(edge.into()))
    }
}

impl From<EdgeSet> for Vec<Edge> {
    fn from(set: EdgeSet) -> Self {
        set.iter().collect()
    }
}

/// An inner shadow along some edges of a pressed surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InnerShadow {
    /// Edges the shadow hugs.
    pub edges: EdgeSet,
    /// Shadow color (RGBA).
    pub color: Color,
    /// Blur radius in pixels; also the shadow size used for mask padding.
    pub blur_radius: f32,
    /// Shadow opacity in `[0, 1]`.
    pub opacity: f32,
    /// Corner radius shared with the surface outline.
    pub corner_radius: f32,
}

/// Even-odd mask used to draw an [`InnerShadow`].
///
/// The compositor fills `outer` minus `inner` with the shadow color, blurs
/// it and clips the result to the surface. Along shadowed edges `inner`
/// starts exactly at the surface edge so the blur bleeds inwards; along
/// the other edges it extends past the surface so nothing is visible there.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InnerShadowMask {
    /// Surface bounds grown by twice the shadow size on every side.
    pub outer: PxRect,
    /// The hole cut out of `outer`.
    pub inner: PxRect,
}

impl InnerShadow {
    /// Computes the even-odd mask for a surface of size `bounds`.
    ///
    /// ```
    /// use soft_ui::{Color, PxRect, PxSize};
    /// use soft_ui_components::shadow::{EdgeSet, InnerShadow};
    ///
    /// let shadow = InnerShadow {
    ///     edges: EdgeSet::TOP_LEFT,
    ///     color: Color::BLACK,
    ///     blur_radius: 5.0,
    ///     opacity: 0.3,
    ///     corner_radius: 8.0,
    /// };
    /// let mask = shadow.mask_geometry(PxSize::new(100.0, 50.0));
    /// assert_eq!(mask.outer, PxRect::new(-10.0, -10.0, 120.0, 70.0));
    /// assert_eq!(mask.inner, PxRect::new(0.0, 0.0, 110.0, 60.0));
    /// ```
    pub fn mask_geometry(&self, bounds: PxSize) -> InnerShadowMask {
        let pad = self.blur_radius * 2.0;
        let surface = PxRect::from_size(bounds);
        let outer = surface.inset_by(-pad, -pad);

        let x0 = if self.edges.contains(Edge::Left) { 0.0 } else { -pad };
        let y0 = if self.edges.contains(Edge::Top) { 0.0 } else { -pad };
        let x1 = if self.edges.contains(Edge::Right) {
            bounds.width
        } else {
            bounds.width + pad
        };
        let y1 = if self.edges.contains(Edge::Bottom) {
            bounds.height
        } else {
            bounds.height + pad
        };

        InnerShadowMask {
            outer,
            inner: PxRect::new(x0, y0, x1 - x0, y1 - y0),
        }
    }
}
