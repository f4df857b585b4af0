// SPDX-License-Identifier: MPL-2.0
//! Legal notice screen, rendered verbatim from `legal.txt`.

use crate::app::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, scrollable, Column, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Notice text, `None` when the file could not be read.
    pub text: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Close,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Close => Event::Close,
    }
}

/// Text shown in the body: the notice itself or a localized placeholder.
fn body(ctx: &ViewContext<'_>) -> String {
    match ctx.text {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => ctx.i18n.tr("legal-placeholder"),
    }
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let close = button(Text::new(format!("← {}", ctx.i18n.tr("close-button"))).size(typography::BODY))
        .on_press(Message::Close);

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(close)
        .push(Text::new(ctx.i18n.tr("legal-title")).size(typography::TITLE_LG))
        .push(Text::new(body(&ctx)).size(typography::BODY));

    container(scrollable(container(content).center_x(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;

    fn i18n() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn notice_is_shown_verbatim() {
        let i18n = i18n();
        let ctx = ViewContext {
            i18n: &i18n,
            text: Some("Impressum\n  Street 1\n"),
        };
        assert_eq!(body(&ctx), "Impressum\n  Street 1\n");
    }

    #[test]
    fn missing_notice_shows_placeholder() {
        let i18n = i18n();
        let ctx = ViewContext {
            i18n: &i18n,
            text: None,
        };
        assert_eq!(body(&ctx), i18n.tr("legal-placeholder"));
        assert!(!body(&ctx).starts_with("MISSING"));
    }

    #[test]
    fn close_bubbles_up() {
        assert_eq!(update(&Message::Close), Event::Close);
    }
}
