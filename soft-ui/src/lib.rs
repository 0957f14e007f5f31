//! Primitive value types for soft-ui.
//!
//! soft-ui renders "soft" (neumorphic) surfaces: shapes that look extruded
//! from or pressed into their background. This crate holds the pieces every
//! surface needs regardless of its style:
//!
//! - [`Color`] for base, shadow and gradient colors
//! - [`Dp`] for authored lengths and the global [`dp::SCALE_FACTOR`]
//! - [`PxPosition`], [`PxSize`] and [`PxRect`] for laid-out geometry
//! - [`init_tracing`] for binaries that want formatted logs
//!
//! The neumorphic renderer itself lives in `soft-ui-components`.
//!
//! ```
//! use soft_ui::{Color, Dp, PxSize};
//!
//! let base = Color::from_rgb(0.9, 0.9, 0.9);
//! let radius = Dp(8.0);
//! let bounds = PxSize::new(100.0, 50.0);
//! assert!(base.is_in_gamut() && radius.is_valid_length() && bounds.is_valid());
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod color;
pub mod dp;
mod logging;
pub mod px;

pub use color::Color;
pub use dp::Dp;
pub use logging::init_tracing;
pub use px::{PxPosition, PxRect, PxSize};
