use soft_ui_components::neumorphic::{Compositor, RenderSpec};
use tracing::info;

/// Stands in for a real layer tree by logging every spec it receives.
#[derive(Debug)]
pub struct LoggingCompositor {
    label: String,
    frames: usize,
}

impl LoggingCompositor {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            frames: 0,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// How many specs have been applied.
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl Compositor for LoggingCompositor {
    fn apply_render_spec(&mut self, spec: &RenderSpec) {
        self.frames += 1;
        info!(
            label = %self.label,
            frame = self.frames,
            width = spec.bounds.width,
            height = spec.bounds.height,
            drop_shadows = spec.drop_shadows.is_some(),
            gradient = spec.gradient.is_some(),
            inner_shadows = spec.inner_shadows.len(),
            "applied render spec"
        );
    }
}
