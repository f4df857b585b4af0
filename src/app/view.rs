// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state, with the notification banners on top.

use super::{Message, Screen};
use crate::app::i18n::fluent::I18n;
use crate::domain::scene::{SceneCatalog, SceneKind};
use crate::domain::vita::Vita;
use crate::media::SceneImage;
use crate::ui::contact;
use crate::ui::gallery;
use crate::ui::legal;
use crate::ui::notifications;
use crate::ui::reel;
use crate::ui::vita;
use iced::widget::{Container, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub catalog: &'a SceneCatalog,
    pub reel: Option<&'a reel::State>,
    pub gallery: Option<&'a gallery::State>,
    pub contact: &'a contact::State,
    pub vita: &'a Vita,
    pub legal: Option<&'a str>,
    pub media: &'a [Option<SceneImage>],
    pub home_preview: Option<&'a SceneImage>,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Reel => view_reel(&ctx),
        Screen::Gallery => view_gallery(&ctx),
        Screen::Vita => vita::view(vita::ViewContext {
            i18n: ctx.i18n,
            vita: ctx.vita,
            subtitle: vita_subtitle(ctx.catalog),
        })
        .map(Message::Vita),
        Screen::Legal => legal::view(legal::ViewContext {
            i18n: ctx.i18n,
            text: ctx.legal,
        })
        .map(Message::Legal),
        Screen::Contact => ctx.contact.view(ctx.i18n).map(Message::Contact),
    };

    let banners = notifications::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(current_view)
        .push(banners)
        .into()
}

fn view_reel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.reel {
        Some(state) => state
            .view(reel::ViewContext {
                i18n: ctx.i18n,
                catalog: ctx.catalog,
                media: ctx.media,
                home_preview: ctx.home_preview,
            })
            .map(Message::Reel),
        None => blank(),
    }
}

fn view_gallery<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let catalog = ctx.catalog;
    let project = ctx
        .gallery
        .and_then(|state| catalog.project(state.slug()).map(|project| (state, project)));

    match project {
        Some((state, project)) => state
            .view(gallery::ViewContext {
                i18n: ctx.i18n,
                project,
            })
            .map(Message::Gallery),
        None => blank(),
    }
}

fn vita_subtitle(catalog: &SceneCatalog) -> &str {
    catalog
        .iter()
        .find_map(|scene| match scene.kind() {
            SceneKind::Vita(info) => Some(info.subtitle.as_str()),
            _ => None,
        })
        .unwrap_or_default()
}

fn blank<'a>() -> Element<'a, Message> {
    Container::new(Text::new(""))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
