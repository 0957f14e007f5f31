//! Error type for neumorphic style validation and configuration loading.

use soft_ui::Dp;
use thiserror::Error;

/// Which derived color a channel error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    /// The darkened drop/inner shadow color.
    ShadowDark,
    /// The lightened drop/inner shadow color.
    ShadowLight,
    /// The darkened gradient stop.
    GradientDark,
    /// The lightened gradient stop.
    GradientLight,
}

impl std::fmt::Display for ColorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ColorRole::ShadowDark => "dark shadow",
            ColorRole::ShadowLight => "light shadow",
            ColorRole::GradientDark => "dark gradient",
            ColorRole::GradientLight => "light gradient",
        };
        f.write_str(name)
    }
}

/// Errors raised while validating or loading a surface style.
#[derive(Error, Debug)]
pub enum StyleError {
    /// A derived color channel left `[0, 1]` under the reject policy.
    #[error("{role} color {channel} channel out of range: {value}")]
    ChannelOutOfRange {
        /// Which derived color overflowed.
        role: ColorRole,
        /// Channel name (`red`, `green` or `blue`).
        channel: &'static str,
        /// The unclamped channel value.
        value: f32,
    },

    /// A gradient angle was NaN or infinite.
    #[error("gradient angle must be finite, got {0}")]
    NonFiniteAngle(f32),

    /// A length was negative.
    #[error("{field} must not be negative, got {value}")]
    NegativeLength {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A length or the intensity was NaN or infinite.
    #[error("{field} must be finite")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },

    /// An opacity was outside `[0, 1]`.
    #[error("opacity must be within [0, 1], got {0}")]
    OpacityOutOfRange(f32),

    /// The configuration file could not be read.
    #[error("failed to read style configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration could not be parsed.
    #[cfg(feature = "serde")]
    #[error("invalid style configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Rejects lengths that are negative or not finite.
pub(crate) fn check_length(field: &'static str, value: Dp) -> Result<(), StyleError> {
    if value.is_valid_length() {
        Ok(())
    } else if value.0.is_finite() {
        Err(StyleError::NegativeLength {
            field,
            value: value.0,
        })
    } else {
        Err(StyleError::NonFinite { field })
    }
}
