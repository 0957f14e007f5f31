//! Physical pixel geometry for soft-ui surfaces.
//!
//! Surfaces are laid out by a host toolkit that reports fractional pixel
//! bounds, so every type here stores `f32` coordinates.
//!
//! # Key Types
//!
//! - [`PxPosition`] - A 2D position or displacement (x, y)
//! - [`PxSize`] - A 2D size (width, height)
//! - [`PxRect`] - An axis-aligned rectangle
//!
//! # Coordinate System
//!
//! - Origin (0, 0) at the top-left corner
//! - X-axis increases to the right
//! - Y-axis increases downward
//!
//! # Example
//!
//! ```
//! use soft_ui::px::{PxPosition, PxRect, PxSize};
//!
//! let bounds = PxRect::from_size(PxSize::new(100.0, 50.0));
//! let grown = bounds.inset_by(-4.0, -4.0);
//! assert_eq!(grown.origin, PxPosition::new(-4.0, -4.0));
//! assert_eq!(grown.size, PxSize::new(108.0, 58.0));
//! ```

use std::ops::{Add, Neg, Sub};

/// A 2D position in physical pixel space.
///
/// Also used for displacements such as shadow offsets, which is why it
/// supports negation.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PxPosition {
    /// The x coordinate.
    pub x: f32,
    /// The y coordinate.
    pub y: f32,
}

impl PxPosition {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new position.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offsets the position by the given deltas.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Converts the position to an `[x, y]` array.
    pub fn to_f32_arr2(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl Add for PxPosition {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for PxPosition {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for PxPosition {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl From<[f32; 2]> for PxPosition {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

/// A 2D size in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PxSize {
    /// The width.
    pub width: f32,
    /// The height.
    pub height: f32,
}

impl PxSize {
    /// A zero-sized extent.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions are finite and not negative.
    pub fn is_valid(self) -> bool {
        [self.width, self.height]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }

    /// Converts the size to a `[width, height]` array.
    pub fn to_f32_arr2(self) -> [f32; 2] {
        [self.width, self.height]
    }
}

impl From<[f32; 2]> for PxSize {
    fn from([width, height]: [f32; 2]) -> Self {
        Self::new(width, height)
    }
}

/// An axis-aligned rectangle in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PxRect {
    /// Top-left corner.
    pub origin: PxPosition,
    /// Extent of the rectangle.
    pub size: PxSize,
}

impl PxRect {
    /// Creates a rectangle from its components.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: PxPosition::new(x, y),
            size: PxSize::new(width, height),
        }
    }

    /// Creates a rectangle anchored at the origin.
    pub const fn from_size(size: PxSize) -> Self {
        Self {
            origin: PxPosition::ZERO,
            size,
        }
    }

    /// Shrinks the rectangle by `dx` on the left and right and by `dy` on the
    /// top and bottom. Negative values grow it.
    pub fn inset_by(self, dx: f32, dy: f32) -> Self {
        Self {
            origin: self.origin.offset(dx, dy),
            size: PxSize::new(self.size.width - 2.0 * dx, self.size.height - 2.0 * dy),
        }
    }

    /// Right edge.
    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Bottom edge.
    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Returns true if the point lies inside the rectangle (edges inclusive).
    pub fn contains(&self, point: PxPosition) -> bool {
        point.x >= self.origin.x
            && point.x <= self.max_x()
            && point.y >= self.origin.y
            && point.y <= self.max_y()
    }
}
