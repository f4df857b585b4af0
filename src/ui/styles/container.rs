// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Degrees, Gradient, Theme};

/// Content screen panel surface.
///
/// Derived from the active theme background with a slight opacity so panels
/// stay readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dark reel stage, independent of the theme mode.
pub fn stage(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::STAGE)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Vertical gradient shown behind a scene without loaded media.
pub fn scene_gradient(colors: [Color; 2]) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let gradient = Linear::new(Degrees(180.0))
            .add_stop(0.0, colors[0])
            .add_stop(1.0, colors[1]);
        container::Style {
            background: Some(Background::Gradient(Gradient::Linear(gradient))),
            text_color: Some(palette::WHITE),
            ..Default::default()
        }
    }
}

/// Translucent veil laid over scene imagery so text stays legible.
pub fn scrim(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::STAGE
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Solid horizontal band of the glitch pulse.
pub fn pulse_band(color: Color, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color { a: alpha, ..color })),
        ..Default::default()
    }
}

/// Warning banner with a severity accent.
pub fn banner(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
