// SPDX-License-Identifier: MPL-2.0
//! Vita screen: the timeline of exhibitions and projects by year.

use crate::app::i18n::fluent::I18n;
use crate::domain::vita::{Vita, VitaYear};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, container, rule, scrollable, Column, Row, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub vita: &'a Vita,
    /// Line under the heading, taken from the scene catalog.
    pub subtitle: &'a str,
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

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let close = button(Text::new(format!("← {}", ctx.i18n.tr("close-button"))).size(typography::BODY))
        .on_press(Message::Close);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(close)
        .push(Text::new(ctx.i18n.tr("vita-title")).size(typography::TITLE_LG))
        .push(Text::new(ctx.subtitle).size(typography::BODY_LG));

    if ctx.vita.years.is_empty() {
        content = content.push(Text::new(ctx.i18n.tr("vita-empty")).size(typography::BODY));
    }
    for year in &ctx.vita.years {
        content = content.push(rule::horizontal(1)).push(view_year(year));
    }

    if let Some(contact) = &ctx.vita.contact {
        content = content.push(rule::horizontal(1)).push(
            Row::new()
                .spacing(spacing::SM)
                .push(Text::new(ctx.i18n.tr("vita-contact")).size(typography::BODY))
                .push(Text::new(contact.as_str()).size(typography::BODY)),
        );
    }

    container(scrollable(container(content).center_x(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn view_year(year: &VitaYear) -> Element<'_, Message> {
    let items = year.items.iter().fold(Column::new().spacing(spacing::SM), |column, item| {
        column.push(
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(item.title.as_str()).size(typography::TITLE_SM))
                .push(Text::new(item.detail.as_str()).size(typography::BODY)),
        )
    });

    Row::new()
        .spacing(spacing::XL)
        .push(
            Column::new()
                .width(Length::Fixed(sizing::THUMBNAIL / 2.0))
                .align_x(Horizontal::Left)
                .push(Text::new(year.year.as_str()).size(typography::TITLE_MD)),
        )
        .push(items.width(Length::Fill))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_bubbles_up() {
        assert_eq!(update(&Message::Close), Event::Close);
    }
}
