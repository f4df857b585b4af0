// SPDX-License-Identifier: MPL-2.0
//! Project gallery screen with a lightbox.
//!
//! The gallery shows the project's eyebrow, title and long description over
//! a grid of thumbnails. Clicking a thumbnail opens the lightbox; the arrow
//! keys step through the images with wrap-around and Escape closes the
//! lightbox, or the whole screen when no lightbox is open.

use crate::app::i18n::fluent::I18n;
use crate::content::resolve_asset;
use crate::domain::scene::ProjectInfo;
use crate::error::Error;
use crate::media::{self, SceneImage};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, image, scrollable, text, Column, Container, Row, Stack, Text};
use iced::{event, keyboard, ContentFit, Element, Length, Task};
use std::path::Path;

/// Thumbnails per grid row.
const GRID_COLUMNS: usize = 3;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub project: &'a ProjectInfo,
}

#[derive(Debug, Clone)]
pub enum Message {
    RawEvent(event::Event),
    ImageLoaded {
        index: usize,
        result: Result<SceneImage, Error>,
    },
    OpenLightbox(usize),
    CloseLightbox,
    Next,
    Previous,
    Close,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Leave the gallery.
    Close,
    /// An image could not be shown.
    ImageFailed(Error),
}

#[derive(Debug, Clone)]
pub struct State {
    slug: String,
    images: Vec<Option<SceneImage>>,
    lightbox: Option<usize>,
}

impl State {
    #[must_use]
    pub fn new(project: &ProjectInfo) -> Self {
        Self {
            slug: project.slug.clone(),
            images: vec![None; project.gallery.len()],
            lightbox: None,
        }
    }

    /// Slug of the project on display.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Index of the image open in the lightbox.
    #[must_use]
    pub fn lightbox(&self) -> Option<usize> {
        self.lightbox
    }

    #[must_use]
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::RawEvent(event::Event::Keyboard(keyboard::Event::KeyPressed {
                key, ..
            })) => self.handle_key(&key),
            Message::RawEvent(_) => Event::None,
            Message::ImageLoaded { index, result } => match result {
                Ok(image) => {
                    if let Some(slot) = self.images.get_mut(index) {
                        *slot = Some(image);
                    }
                    Event::None
                }
                Err(error) => {
                    log::warn!("Gallery image {} of {} failed: {}", index, self.slug, error);
                    Event::ImageFailed(error)
                }
            },
            Message::OpenLightbox(index) => {
                if index < self.images.len() {
                    self.lightbox = Some(index);
                }
                Event::None
            }
            Message::CloseLightbox => {
                self.lightbox = None;
                Event::None
            }
            Message::Next => {
                self.step(1);
                Event::None
            }
            Message::Previous => {
                self.step(-1);
                Event::None
            }
            Message::Close => Event::Close,
        }
    }

    fn handle_key(&mut self, key: &keyboard::Key) -> Event {
        use keyboard::key::Named;

        match key {
            keyboard::Key::Named(Named::Escape) => {
                if self.lightbox.take().is_some() {
                    Event::None
                } else {
                    Event::Close
                }
            }
            keyboard::Key::Named(Named::ArrowRight) => {
                self.step(1);
                Event::None
            }
            keyboard::Key::Named(Named::ArrowLeft) => {
                self.step(-1);
                Event::None
            }
            _ => Event::None,
        }
    }

    /// Moves the lightbox by `delta`, wrapping at both ends. No-op while the
    /// lightbox is closed.
    fn step(&mut self, delta: isize) {
        let count = self.images.len();
        if let Some(current) = self.lightbox.filter(|_| count > 0) {
            let next = (current as isize + delta).rem_euclid(count as isize);
            self.lightbox = Some(next as usize);
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let page = view_page(self, &ctx);
        match self.lightbox {
            Some(index) => Stack::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(page)
                .push(view_lightbox(self, &ctx, index))
                .into(),
            None => page,
        }
    }
}

/// Loads every gallery image of `project` in the background.
pub fn load_images(project: &ProjectInfo, asset_dir: &Path) -> Task<Message> {
    Task::batch(project.gallery.iter().enumerate().map(|(index, entry)| {
        let path = resolve_asset(asset_dir, &entry.src);
        Task::perform(async move { media::load_scene_image(&path) }, move |result| {
            Message::ImageLoaded { index, result }
        })
    }))
}

fn view_page<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let project = ctx.project;

    let close = button(Text::new(format!("← {}", ctx.i18n.tr("close-button"))).size(typography::BODY))
        .on_press(Message::Close);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(close)
        .push(Text::new(project.eyebrow.as_str()).size(typography::CAPTION))
        .push(Text::new(project.title.as_str()).size(typography::TITLE_LG))
        .push(Text::new(project.long_description.as_str()).size(typography::BODY_LG));

    if state.images.is_empty() {
        content = content.push(Text::new(ctx.i18n.tr("gallery-empty")).size(typography::BODY));
    } else {
        content = content.push(view_grid(state, project));
    }

    Container::new(scrollable(container(content).center_x(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_grid<'a>(state: &'a State, project: &'a ProjectInfo) -> Element<'a, Message> {
    let rows = state
        .images
        .chunks(GRID_COLUMNS)
        .enumerate()
        .map(|(row_index, chunk)| -> Element<'a, Message> {
            let cells = chunk.iter().enumerate().map(|(offset, loaded)| {
                let index = row_index * GRID_COLUMNS + offset;
                let alt = project
                    .gallery
                    .get(index)
                    .map_or("", |entry| entry.alt.as_str());
                thumbnail(index, loaded.as_ref(), alt)
            });
            Row::with_children(cells).spacing(spacing::SM).into()
        });

    Column::with_children(rows).spacing(spacing::SM).into()
}

fn thumbnail<'a>(index: usize, loaded: Option<&'a SceneImage>, alt: &'a str) -> Element<'a, Message> {
    let face: Element<'a, Message> = match loaded {
        Some(picture) => image(picture.handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fixed(sizing::THUMBNAIL))
            .height(Length::Fixed(sizing::THUMBNAIL))
            .into(),
        None => Container::new(Text::new(alt).size(typography::CAPTION))
            .width(Length::Fixed(sizing::THUMBNAIL))
            .height(Length::Fixed(sizing::THUMBNAIL))
            .padding(spacing::XS)
            .align_y(Vertical::Bottom)
            .style(styles::container::scene_gradient(palette::GRADIENT_A))
            .into(),
    };

    button(face)
        .padding(0)
        .style(styles::button::link)
        .on_press(Message::OpenLightbox(index))
        .into()
}

fn overlay_button() -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    styles::button::overlay(palette::WHITE, opacity::OVERLAY_MEDIUM, opacity::OVERLAY_HOVER)
}

fn view_lightbox<'a>(state: &'a State, ctx: &ViewContext<'a>, index: usize) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match state.images.get(index).and_then(Option::as_ref) {
        Some(picture) => image(picture.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Container::new(text(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    };

    let counter = ctx.i18n.tr_with_args(
        "gallery-counter",
        &[
            ("current", &(index + 1).to_string()),
            ("total", &state.images.len().to_string()),
        ],
    );
    let caption = ctx
        .project
        .gallery
        .get(index)
        .map_or("", |entry| entry.alt.as_str());

    let controls = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            button(Text::new("‹").size(typography::TITLE_LG))
                .style(overlay_button())
                .on_press(Message::Previous),
        )
        .push(
            Column::new()
                .width(Length::Fill)
                .align_x(Horizontal::Center)
                .push(Text::new(caption).size(typography::BODY))
                .push(Text::new(counter).size(typography::CAPTION)),
        )
        .push(
            button(Text::new("›").size(typography::TITLE_LG))
                .style(overlay_button())
                .on_press(Message::Next),
        )
        .push(
            button(Text::new(ctx.i18n.tr("close-button")).size(typography::BODY))
                .style(overlay_button())
                .on_press(Message::CloseLightbox),
        );

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(picture)
            .push(controls),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::XL)
    .style(styles::container::scrim(opacity::OVERLAY_PRESSED))
    .into()
}
