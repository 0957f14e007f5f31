//! JSON loading for surface styles and decorations.
//!
//! Every field is optional and falls back to its default. Shapes and light
//! directions accept either a snake_case name or a raw index:
//!
//! ```json
//! { "shape": "concave", "direction": 3, "intensity": 10, "corner_radius": 8 }
//! ```

use std::{fs, path::Path};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{decoration::ViewDecoration, error::StyleError, neumorphic::SurfaceStyle};

/// Parses `json` into `T`.
pub fn load_json<T: DeserializeOwned>(json: &str) -> Result<T, StyleError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses the JSON file at `path`.
pub fn load_json_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, StyleError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading style configuration");
    let contents = fs::read_to_string(path)?;
    load_json(&contents)
}

impl SurfaceStyle {
    /// Parses a style from JSON and validates it.
    pub fn from_json_str(json: &str) -> Result<Self, StyleError> {
        let style: Self = load_json(json)?;
        style.validate()?;
        Ok(style)
    }

    /// Reads a style from a JSON file and validates it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let style: Self = load_json_file(path)?;
        style.validate()?;
        Ok(style)
    }
}

impl ViewDecoration {
    /// Parses a decoration from JSON and validates it.
    pub fn from_json_str(json: &str) -> Result<Self, StyleError> {
        let decoration: Self = load_json(json)?;
        decoration.validate()?;
        Ok(decoration)
    }
}
