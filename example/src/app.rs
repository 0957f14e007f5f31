use soft_ui::{Color, Dp, PxSize};
use soft_ui_components::{
    StyleError,
    decoration::{DecorationSpec, ViewDecoration},
    gradient::{AngledGradient, LinearGradient},
    neumorphic::{NeumorphicSurface, SurfaceStyle},
    shape_def::{LightDirection, Shape},
};

use crate::compositor::LoggingCompositor;

/// Portrait phone viewport the demo lays out against, in dp.
pub const VIEWPORT: (Dp, Dp) = (Dp(390.0), Dp(844.0));
/// Physical pixels per dp on the demo display.
pub const DEVICE_SCALE_FACTOR: f64 = 3.0;

const CARD_COUNT: usize = 10;
const LIST_RESERVED_HEIGHT: Dp = Dp(150.0);
const HORIZONTAL_MARGIN: Dp = Dp(20.0);
const HEADER_HEIGHT: Dp = Dp(44.0);
const DETAILS_ROW_HEIGHT: Dp = Dp(260.0);
const DOWNLOAD_BUTTON: Dp = Dp(56.0);
const PLAY_BUTTON: Dp = Dp(80.0);

fn px_size(width: Dp, height: Dp) -> PxSize {
    PxSize::new(width.to_pixels_f32(), height.to_pixels_f32())
}

/// One laid-out demo screen.
pub struct Screen {
    pub header: DecorationSpec,
    pub background: LinearGradient,
    pub cards: Vec<NeumorphicSurface<LoggingCompositor>>,
    pub controls: Vec<NeumorphicSurface<LoggingCompositor>>,
}

/// Light gray cards lit from the top-left.
pub fn default_card_style() -> SurfaceStyle {
    SurfaceStyle::default()
        .corner_radius(20.0)
        .intensity(12.0)
        .base_color(Color::from_rgb(0.88, 0.9, 0.93))
        .shadow_opacity(0.6)
        .shadow_blur_radius(16.0)
        .shadow_offset(6.0)
}

fn background() -> Result<LinearGradient, StyleError> {
    AngledGradient {
        start_color: Some(Color::from_rgb(0.93, 0.94, 0.96)),
        end_color: Some(Color::from_rgb(0.84, 0.86, 0.9)),
        ..AngledGradient::default()
    }
    .to_gradient(0.0)
}

fn header() -> Result<DecorationSpec, StyleError> {
    ViewDecoration::header_shadow().resolve(px_size(VIEWPORT.0, HEADER_HEIGHT))
}

fn lay_out(
    label: String,
    style: SurfaceStyle,
    bounds: PxSize,
) -> Result<NeumorphicSurface<LoggingCompositor>, StyleError> {
    let mut surface = NeumorphicSurface::new(style, LoggingCompositor::new(label))?;
    surface.notify_bounds_changed(bounds)?;
    Ok(surface)
}

/// Vertical list of convex cards, each nearly a full viewport tall.
pub fn list_screen(card_style: SurfaceStyle) -> Result<Screen, StyleError> {
    let style = card_style
        .shape(Shape::Convex)
        .direction(LightDirection::TopLeft);
    let bounds = px_size(
        Dp(VIEWPORT.0.0 - 2.0 * HORIZONTAL_MARGIN.0),
        Dp(VIEWPORT.1.0 - LIST_RESERVED_HEIGHT.0),
    );

    let cards = (0..CARD_COUNT)
        .map(|index| lay_out(format!("list-card-{index}"), style, bounds))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Screen {
        header: header()?,
        background: background()?,
        cards,
        controls: Vec::new(),
    })
}

/// Horizontal carousel of cards plus a flat download and a pressed play button.
pub fn details_screen(card_style: SurfaceStyle) -> Result<Screen, StyleError> {
    let bounds = px_size(VIEWPORT.0 / 1.3, DETAILS_ROW_HEIGHT);
    let cards = (0..CARD_COUNT)
        .map(|index| lay_out(format!("details-card-{index}"), card_style, bounds))
        .collect::<Result<Vec<_>, _>>()?;

    let download = lay_out(
        "download-button".to_owned(),
        card_style
            .shape(Shape::Flat)
            .corner_radius(DOWNLOAD_BUTTON / 2.0),
        px_size(DOWNLOAD_BUTTON, DOWNLOAD_BUTTON),
    )?;
    let play = lay_out(
        "play-button".to_owned(),
        card_style
            .shape(Shape::Pressed)
            .corner_radius(PLAY_BUTTON / 2.0),
        px_size(PLAY_BUTTON, PLAY_BUTTON),
    )?;

    Ok(Screen {
        header: header()?,
        background: background()?,
        cards,
        controls: vec![download, play],
    })
}
