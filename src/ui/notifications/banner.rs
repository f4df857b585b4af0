// SPDX-License-Identifier: MPL-2.0
//! Banner rendering.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::app::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

fn view_one<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
    let accent = notification.severity().color();

    let marker = Text::new("!")
        .size(typography::TITLE_SM)
        .style(move |_theme: &Theme| text::Style {
            color: Some(accent),
        });

    let message = Text::new(i18n.tr(notification.message_key())).size(typography::BODY);

    let dismiss = button(Text::new("×").size(typography::BODY_LG))
        .on_press(Message::Dismiss(notification.id()))
        .padding([0.0, spacing::XS])
        .style(dismiss_button_style);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(marker)
        .push(Container::new(message).width(Length::Fill))
        .push(dismiss);

    Container::new(content)
        .width(Length::Fixed(sizing::BANNER_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::banner(accent))
        .into()
}

/// Stacks the visible banners in the top-right corner.
pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
    let banners: Vec<Element<'a, Message>> = manager
        .visible()
        .map(|notification| view_one(notification, i18n))
        .collect();

    Container::new(
        Column::with_children(banners)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Right)
    .align_y(alignment::Vertical::Top)
    .padding(spacing::MD)
    .into()
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let background = match status {
        button::Status::Hovered => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
