// SPDX-License-Identifier: MPL-2.0
//! Navigation dot strip along the bottom of the reel.
//!
//! Every scene gets a fixed-width slot (dot plus label). When the slots do
//! not fit the window the strip scrolls horizontally, and after each
//! transition it is scrolled so the active slot sits in the middle.

use super::Message;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::scrollable::{Direction, RelativeOffset, Scrollbar, Viewport};
use iced::widget::{button, container, operation, text, Column, Id, Row, Scrollable, Text};
use iced::{Color, Element, Length, Task, Theme};

/// Identifier of the strip scrollable.
pub const STRIP_ID: &str = "reel-nav-strip";

/// Horizontal offset that centres a dot inside the strip viewport.
///
/// `dot_x` is the left edge of the dot's slot and `dot_width` its width.
/// Returns `None` when the content fits the viewport (with one pixel of
/// slack), i.e. when there is nothing to scroll.
#[must_use]
pub fn centered_scroll_offset(
    dot_x: f32,
    dot_width: f32,
    viewport_width: f32,
    content_width: f32,
) -> Option<f32> {
    if content_width <= viewport_width + 1.0 {
        return None;
    }
    let max_offset = content_width - viewport_width;
    Some((dot_x - viewport_width / 2.0 + dot_width / 2.0).clamp(0.0, max_offset))
}

/// Last known geometry of the strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strip {
    slot_count: usize,
    viewport_width: f32,
}

impl Strip {
    #[must_use]
    pub fn new(slot_count: usize, viewport_width: f32) -> Self {
        Self {
            slot_count,
            viewport_width,
        }
    }

    #[must_use]
    pub fn content_width(&self) -> f32 {
        self.slot_count as f32 * sizing::DOT_SLOT_WIDTH
    }

    #[must_use]
    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// Records the width the strip is actually given.
    pub fn set_viewport_width(&mut self, width: f32) {
        if width.is_finite() && width > 0.0 {
            self.viewport_width = width;
        }
    }

    /// Picks up the width reported by the scrollable itself.
    pub fn observe(&mut self, viewport: &Viewport) {
        self.set_viewport_width(viewport.bounds().width);
    }

    /// Offset that centres slot `index`, `None` when the strip does not scroll.
    #[must_use]
    pub fn offset_for(&self, index: usize) -> Option<f32> {
        centered_scroll_offset(
            index as f32 * sizing::DOT_SLOT_WIDTH,
            sizing::DOT_SLOT_WIDTH,
            self.viewport_width,
            self.content_width(),
        )
    }

    /// Task scrolling the strip so slot `index` is centred.
    pub fn scroll_to(&self, index: usize) -> Task<Message> {
        let Some(offset) = self.offset_for(index) else {
            return Task::none();
        };
        let max_offset = self.content_width() - self.viewport_width;
        operation::snap_to(
            Id::new(STRIP_ID),
            RelativeOffset {
                x: offset / max_offset,
                y: 0.0,
            },
        )
    }
}

/// One entry of the strip.
pub struct Slot {
    pub label: String,
    pub active: bool,
    pub visited: bool,
}

/// Renders the strip. Dots are only clickable while no transition runs.
pub fn view<'a>(slots: Vec<Slot>, interactive: bool) -> Element<'a, Message> {
    let row = slots
        .into_iter()
        .enumerate()
        .fold(Row::new(), |row, (index, slot)| {
            row.push(view_slot(index, slot, interactive))
        });

    let strip = Scrollable::new(row)
        .id(Id::new(STRIP_ID))
        .width(Length::Shrink)
        .direction(Direction::Horizontal(
            Scrollbar::new().width(0.0).scroller_width(0.0),
        ))
        .on_scroll(Message::StripScrolled);

    container(strip)
        .center_x(Length::Fill)
        .height(Length::Fixed(sizing::NAV_STRIP_HEIGHT))
        .padding([0.0, spacing::MD])
        .into()
}

fn view_slot<'a>(index: usize, slot: Slot, interactive: bool) -> Element<'a, Message> {
    let size = if slot.active {
        sizing::DOT_ACTIVE
    } else {
        sizing::DOT
    };

    let dot = button(text(""))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .padding(0)
        .style(styles::button::nav_dot(slot.active, slot.visited))
        .on_press_maybe(interactive.then_some(Message::DotPressed(index)));

    let label_alpha = if slot.active {
        opacity::OPAQUE
    } else {
        opacity::TEXT_MUTED
    };
    let label = Text::new(slot.label)
        .size(typography::CAPTION)
        .style(move |_theme: &Theme| text::Style {
            color: Some(Color {
                a: label_alpha,
                ..palette::WHITE
            }),
        });

    Column::new()
        .width(Length::Fixed(sizing::DOT_SLOT_WIDTH))
        .align_x(Horizontal::Center)
        .spacing(spacing::XS)
        .push(dot)
        .push(label)
        .into()
}
