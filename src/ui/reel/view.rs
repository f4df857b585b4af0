// SPDX-License-Identifier: MPL-2.0
//! Reel rendering: active scene, glitch pulse overlay and chrome.

use super::nav_strip::{self, Slot};
use super::{Message, State};
use crate::app::i18n::fluent::I18n;
use crate::domain::scene::{Scene, SceneCatalog, SceneKind};
use crate::media::SceneImage;
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, image, text, Column, Container, Row, Stack, Text};
use iced::{Color, ContentFit, Element, Length, Theme};

/// Number of discrete frames the glitch pulse is drawn in.
pub const PULSE_STEPS: u8 = 8;

/// Contextual data needed to render the reel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a SceneCatalog,
    /// Decoded scene media, indexed like the catalog.
    pub media: &'a [Option<SceneImage>],
    /// Placeholder for the home scene until its media is ready.
    pub home_preview: Option<&'a SceneImage>,
}

/// Frame of the pulse animation for `progress` in `0.0..=1.0`.
#[must_use]
pub fn pulse_step(progress: f32) -> u8 {
    let steps = f32::from(PULSE_STEPS);
    // Truncation is the stepping.
    let step = (progress.clamp(0.0, 1.0) * steps).floor() as u8;
    step.min(PULSE_STEPS - 1)
}

/// Band opacity for `progress`: full strength on the first frame, fading out
/// in equal steps.
#[must_use]
pub fn pulse_alpha(progress: f32) -> f32 {
    let remaining = f32::from(PULSE_STEPS - pulse_step(progress)) / f32::from(PULSE_STEPS);
    opacity::PULSE_PEAK * remaining
}

/// Vertical layout of the pulse for a frame: `(band color, height portion)`,
/// where `None` is a transparent gap. The bands jump on every frame.
fn band_layout(step: u8) -> [(Option<Color>, u16); 5] {
    let step = u16::from(step);
    [
        (None, 1 + (step * 3) % 5),
        (Some(palette::GLITCH_CYAN), 1),
        (None, 1 + (step * 5) % 4),
        (Some(palette::GLITCH_MAGENTA), 1 + step % 2),
        (None, 1 + (step * 7) % 3),
    ]
}

pub(super) fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let active = state.active_index();

    let mut layers: Vec<Element<'a, Message>> = Vec::with_capacity(3);
    if let Some(scene) = ctx.catalog.get(active) {
        layers.push(view_scene(active, scene, &ctx));
    }
    if let Some(progress) = state.pulse_progress() {
        layers.push(view_pulse(progress));
    }
    layers.push(view_chrome(state, &ctx));

    Container::new(
        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::stage)
    .into()
}

fn view_scene<'a>(index: usize, scene: &'a Scene, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let media = ctx.media.get(index).and_then(Option::as_ref);
    let placeholder = match scene.kind() {
        SceneKind::Home(_) => ctx.home_preview,
        _ => None,
    };

    let background: Element<'a, Message> = match media.or(placeholder) {
        Some(picture) => image(picture.handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Container::new(text(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::scene_gradient(gradient_for(index)))
            .into(),
    };

    let is_loading = media.is_none() && scene.image().is_some();
    let content = Container::new(scene_content(index, scene, ctx.i18n, is_loading))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XXL)
        .align_x(Horizontal::Left)
        .align_y(Vertical::Center)
        .style(styles::container::scrim(opacity::OVERLAY_SUBTLE));

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(background)
        .push(content)
        .into()
}

fn scene_content<'a>(
    index: usize,
    scene: &'a Scene,
    i18n: &I18n,
    is_loading: bool,
) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::MD).max_width(720.0);

    match scene.kind() {
        SceneKind::Home(home) => {
            column = column
                .push(Text::new(home.title.as_str()).size(typography::DISPLAY))
                .push(muted(home.subtitle.as_str(), typography::BODY_LG))
                .push(muted(i18n.tr("reel-scroll-hint"), typography::CAPTION));
        }
        SceneKind::Project(project) => {
            column = column
                .push(muted(project.eyebrow.as_str(), typography::CAPTION))
                .push(
                    button(Text::new(project.title.as_str()).size(typography::DISPLAY))
                        .padding(0)
                        .style(styles::button::link)
                        .on_press(Message::OpenScene(index)),
                )
                .push(Text::new(project.description.as_str()).size(typography::BODY_LG))
                .push(call_to_action(i18n.tr("reel-open-gallery"), index));
        }
        SceneKind::Vita(vita) => {
            column = column
                .push(
                    button(Text::new(i18n.tr("vita-title")).size(typography::DISPLAY))
                        .padding(0)
                        .style(styles::button::link)
                        .on_press(Message::OpenScene(index)),
                )
                .push(muted(vita.subtitle.as_str(), typography::BODY_LG))
                .push(call_to_action(i18n.tr("reel-open-vita"), index));
        }
    }

    if is_loading {
        column = column.push(muted(i18n.tr("reel-loading"), typography::CAPTION));
    }

    column.into()
}

fn call_to_action<'a>(label: String, index: usize) -> Element<'a, Message> {
    button(Text::new(format!("{label} →")).size(typography::BODY))
        .padding([spacing::XS, 0.0])
        .style(styles::button::link)
        .on_press(Message::OpenScene(index))
        .into()
}

fn muted<'a>(content: impl text::IntoFragment<'a>, size: f32) -> Text<'a> {
    Text::new(content)
        .size(size)
        .style(|_theme: &Theme| text::Style {
            color: Some(Color {
                a: opacity::TEXT_MUTED,
                ..palette::WHITE
            }),
        })
}

fn gradient_for(index: usize) -> [Color; 2] {
    match index % 3 {
        0 => palette::GRADIENT_A,
        1 => palette::GRADIENT_B,
        _ => palette::GRADIENT_C,
    }
}

fn view_pulse<'a>(progress: f32) -> Element<'a, Message> {
    let alpha = pulse_alpha(progress);
    let bands = band_layout(pulse_step(progress))
        .into_iter()
        .fold(Column::new(), |column, (color, portion)| {
            let band = Container::new(text(""))
                .width(Length::Fill)
                .height(Length::FillPortion(portion));
            match color {
                Some(color) => column.push(band.style(styles::container::pulse_band(color, alpha))),
                None => column.push(band),
            }
        });

    bands.width(Length::Fill).height(Length::Fill).into()
}

fn view_chrome<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let snapshot = state.snapshot();
    let slots = ctx
        .catalog
        .iter()
        .enumerate()
        .map(|(index, scene)| Slot {
            label: dot_label(scene, ctx.i18n),
            active: index == snapshot.active_index,
            visited: snapshot.visited.contains(&index),
        })
        .collect();

    let footer = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(muted(ctx.i18n.tr("footer-copyright"), typography::CAPTION))
        .push(footer_link(ctx.i18n.tr("footer-legal"), Message::OpenLegal))
        .push(footer_link(ctx.i18n.tr("footer-contact"), Message::OpenContact));

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(container(text("")).height(Length::Fill))
        .push(nav_strip::view(slots, !snapshot.is_transitioning))
        .push(
            container(footer)
                .center_x(Length::Fill)
                .padding([spacing::XS, spacing::MD]),
        )
        .into()
}

fn footer_link<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::CAPTION))
        .padding(0)
        .style(styles::button::link)
        .on_press(message)
        .into()
}

fn dot_label(scene: &Scene, i18n: &I18n) -> String {
    match scene.kind() {
        SceneKind::Home(_) => i18n.tr("nav-home"),
        SceneKind::Vita(_) => i18n.tr("nav-vita"),
        SceneKind::Project(_) => scene.label(),
    }
}
