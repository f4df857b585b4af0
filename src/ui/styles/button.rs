// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (contact form submit).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::ACCENT_500)),
            text_color: BLACK,
            border: Border {
                color: palette::ACCENT_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::ACCENT_400)),
            text_color: BLACK,
            border: Border {
                color: palette::ACCENT_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_700)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Buttons floating over imagery (close, lightbox arrows).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Borderless text link, brightening on hover.
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => WHITE,
        _ => Color {
            a: opacity::TEXT_MUTED,
            ..WHITE
        },
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Navigation dot. The active dot is filled and glows.
pub fn nav_dot(active: bool, visited: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let fill = if active {
            palette::ACCENT_500
        } else if matches!(status, button::Status::Hovered) {
            WHITE
        } else if visited {
            palette::GRAY_200
        } else {
            palette::GRAY_700
        };

        button::Style {
            background: Some(Background::Color(fill)),
            text_color: WHITE,
            border: Border {
                color: WHITE,
                width: if active { 0.0 } else { 1.0 },
                radius: radius::FULL.into(),
            },
            shadow: if active { shadow::GLOW } else { shadow::NONE },
            snap: true,
        }
    }
}
