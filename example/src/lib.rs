mod app;
mod compositor;

use std::path::Path;

use soft_ui_components::{StyleError, neumorphic::SurfaceStyle};
use tracing::info;

pub use app::{DEVICE_SCALE_FACTOR, Screen, VIEWPORT, details_screen, list_screen};
pub use compositor::LoggingCompositor;

/// Lays out both demo screens at [`DEVICE_SCALE_FACTOR`] and prints the play
/// button's spec as JSON.
///
/// `style_path` optionally points at a JSON card style; otherwise the built-in
/// light gray card style is used.
pub fn run(style_path: Option<&Path>) -> Result<(), StyleError> {
    soft_ui::dp::set_scale_factor(DEVICE_SCALE_FACTOR);

    let card_style = match style_path {
        Some(path) => SurfaceStyle::from_json_file(path)?,
        None => app::default_card_style(),
    };

    let list = list_screen(card_style)?;
    info!(cards = list.cards.len(), "list screen laid out");

    let details = details_screen(card_style)?;
    info!(cards = details.cards.len(), "details screen laid out");

    if let Some(spec) = details.controls.last().and_then(|control| control.last_spec()) {
        println!("{}", serde_json::to_string_pretty(spec)?);
    }
    Ok(())
}
