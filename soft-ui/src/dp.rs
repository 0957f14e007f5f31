//! # Density-Independent Pixels (Dp)
//!
//! Style values such as corner radii, blur radii and shadow offsets are
//! authored in [`Dp`] and resolved to physical pixels at render time.
//!
//! ## Scale Factor
//!
//! The conversion between dp and physical pixels is controlled by a global scale factor
//! stored in [`SCALE_FACTOR`]. When it has not been initialized, a factor of `1.0` is
//! assumed, so one dp equals one pixel.
//!
//! ## Usage
//!
//! ```
//! use soft_ui::Dp;
//!
//! let radius = Dp(8.0);
//! let pixels = radius.to_pixels_f32();
//! let back = Dp::from_pixels_f32(pixels);
//! assert_eq!(back, radius);
//! ```

use std::sync::OnceLock;

use parking_lot::RwLock;

/// Global scale factor for converting between density-independent pixels and physical pixels.
///
/// The scale factor represents how many physical pixels correspond to one dp unit:
/// - Scale factor of 1.0: 1 dp = 1 pixel (standard density)
/// - Scale factor of 2.0: 1 dp = 2 pixels (high density)
pub static SCALE_FACTOR: OnceLock<RwLock<f64>> = OnceLock::new();

fn scale_factor() -> f64 {
    SCALE_FACTOR.get().map(|lock| *lock.read()).unwrap_or(1.0)
}

/// Sets the global scale factor, initializing it on first use.
pub fn set_scale_factor(factor: f64) {
    let lock = SCALE_FACTOR.get_or_init(|| RwLock::new(factor));
    *lock.write() = factor;
}

/// Density-independent pixels (dp) for UI scaling.
///
/// `Dp` wraps a single `f64` and is converted to physical pixels using the
/// global [`SCALE_FACTOR`].
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Dp(pub f64);

impl Dp {
    /// Zero dp.
    pub const ZERO: Self = Dp(0.0);

    /// Creates a new `Dp` instance with the specified value.
    pub const fn new(value: f64) -> Self {
        Dp(value)
    }

    /// Converts this dp value to physical pixels as an `f64`.
    pub fn to_pixels_f64(&self) -> f64 {
        self.0 * scale_factor()
    }

    /// Creates a `Dp` value from physical pixels specified as an `f64`.
    pub fn from_pixels_f64(value: f64) -> Self {
        Dp(value / scale_factor())
    }

    /// Converts this dp value to physical pixels as an `f32`.
    ///
    /// Converting from `f64` to `f32` may lose precision for very large values.
    pub fn to_pixels_f32(&self) -> f32 {
        (self.0 * scale_factor()) as f32
    }

    /// Creates a `Dp` value from physical pixels specified as an `f32`.
    pub fn from_pixels_f32(value: f32) -> Self {
        Dp((value as f64) / scale_factor())
    }

    /// Whether the value is finite and not negative.
    pub fn is_valid_length(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Dp::new(value)
    }
}

impl std::ops::Div<f64> for Dp {
    type Output = Dp;

    fn div(self, rhs: f64) -> Self::Output {
        Dp(self.0 / rhs)
    }
}

impl std::ops::Mul<f64> for Dp {
    type Output = Dp;

    fn mul(self, rhs: f64) -> Self::Output {
        Dp(self.0 * rhs)
    }
}

impl std::ops::Neg for Dp {
    type Output = Dp;

    fn neg(self) -> Self::Output {
        Dp(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dp_arithmetic() {
        assert_eq!(Dp(10.0) / 2.0, Dp(5.0));
        assert_eq!(Dp(10.0) * 2.0, Dp(20.0));
        assert_eq!(-Dp(3.0), Dp(-3.0));
    }

    #[test]
    fn test_valid_length() {
        assert!(Dp(0.0).is_valid_length());
        assert!(Dp(12.5).is_valid_length());
        assert!(!Dp(-1.0).is_valid_length());
        assert!(!Dp(f64::NAN).is_valid_length());
        assert!(!Dp(f64::INFINITY).is_valid_length());
    }

    #[test]
    fn test_scale_factor_conversion() {
        set_scale_factor(2.0);
        assert_eq!(Dp(8.0).to_pixels_f32(), 16.0);
        assert_eq!(Dp::from_pixels_f64(16.0), Dp(8.0));
        set_scale_factor(1.0);
        assert_eq!(Dp(8.0).to_pixels_f64(), 8.0);
    }
}
