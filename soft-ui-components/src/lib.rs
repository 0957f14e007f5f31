//! Neumorphic surfaces and view decorations for soft-ui.
//!
//! # Usage
//!
//! Build a [`neumorphic::SurfaceStyle`], render it, and hand the
//! [`neumorphic::RenderSpec`] to whatever draws your layers.
//!
//! ```
//! use soft_ui::{Color, PxSize};
//! use soft_ui_components::{
//!     neumorphic::{SurfaceStyle, render},
//!     shape_def::Shape,
//! };
//!
//! let style = SurfaceStyle::default()
//!     .shape(Shape::Pressed)
//!     .intensity(10.0)
//!     .base_color(Color::from_rgb(0.9, 0.9, 0.9))
//!     .shadow_opacity(0.3)
//!     .bounds(PxSize::new(60.0, 60.0));
//!
//! let spec = render(&style).unwrap();
//! assert_eq!(spec.inner_shadows.len(), 2);
//! ```
//!
//! # Modules
//!
//! - [`neumorphic`]: color derivation, shadow placement and the renderer
//! - [`gradient`]: diagonal and angle-driven linear gradients
//! - [`shadow`]: drop shadow layers, edge sets and inner shadows
//! - [`decoration`]: plain corner, border and shadow styling
#![deny(missing_docs, clippy::unwrap_used)]

#[cfg(feature = "serde")]
pub mod config;
pub mod decoration;
pub mod error;
pub mod gradient;
pub mod neumorphic;
pub mod shadow;
pub mod shape_def;

pub use error::{ColorRole, StyleError};
