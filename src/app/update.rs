// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the message handlers for every screen and the
//! screen transitions. The reel is mounted only while it is on screen:
//! leaving it tears the navigator down, returning mounts a fresh one that
//! starts on the home scene.

use super::scene_media::SceneMedia;
use super::{Message, Screen};
use crate::domain::scene::{SceneCatalog, SceneKind};
use crate::error::Error;
use crate::media::{self, SceneImage};
use crate::ui::contact::{self, Event as ContactEvent};
use crate::ui::gallery::{self, Event as GalleryEvent};
use crate::ui::legal::{self, Event as LegalEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::reel::{self, Effect as ReelEffect, ReelSettings};
use crate::ui::vita::{self, Event as VitaEvent};
use iced::{event, window, Size, Task};
use std::path::Path;
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub catalog: &'a SceneCatalog,
    pub reel: &'a mut Option<reel::State>,
    pub reel_settings: ReelSettings,
    pub gallery: &'a mut Option<gallery::State>,
    pub contact: &'a mut contact::State,
    pub media: &'a mut SceneMedia,
    pub asset_dir: &'a Path,
    pub notifications: &'a mut notifications::Manager,
    pub window_width: &'a mut f32,
}

/// Handles reel messages and applies the effect they produce.
pub fn handle_reel_message(ctx: &mut UpdateContext<'_>, message: reel::Message) -> Task<Message> {
    let Some(state) = ctx.reel.as_mut() else {
        return Task::none();
    };

    let (effect, task) = state.handle_message(message, Instant::now());
    let follow_up = apply_reel_effect(ctx, effect);
    Task::batch([task.map(Message::Reel), follow_up])
}

fn apply_reel_effect(ctx: &mut UpdateContext<'_>, effect: ReelEffect) -> Task<Message> {
    match effect {
        ReelEffect::None => Task::none(),
        ReelEffect::Visited(indices) => load_scene_media(ctx, &indices),
        ReelEffect::OpenScene(index) => open_scene(ctx, index),
        ReelEffect::OpenLegal => {
            leave_reel(ctx, Screen::Legal);
            Task::none()
        }
        ReelEffect::OpenContact => {
            *ctx.contact = contact::State::new();
            leave_reel(ctx, Screen::Contact);
            Task::none()
        }
    }
}

/// Opens the content screen behind a scene: a project's gallery or the
/// vita. The home scene has nothing behind it.
fn open_scene(ctx: &mut UpdateContext<'_>, index: usize) -> Task<Message> {
    let catalog = ctx.catalog;
    match catalog.get(index).map(|scene| scene.kind()) {
        Some(SceneKind::Project(project)) => {
            log::debug!("Opening gallery of {}", project.slug);
            *ctx.gallery = Some(gallery::State::new(project));
            leave_reel(ctx, Screen::Gallery);
            gallery::load_images(project, ctx.asset_dir).map(Message::Gallery)
        }
        Some(SceneKind::Vita(_)) => {
            leave_reel(ctx, Screen::Vita);
            Task::none()
        }
        Some(SceneKind::Home(_)) | None => Task::none(),
    }
}

/// Switches to a content screen, unmounting the reel.
fn leave_reel(ctx: &mut UpdateContext<'_>, target: Screen) {
    if let Some(mut state) = ctx.reel.take() {
        state.teardown();
    }
    *ctx.screen = target;
}

/// Mounts a fresh reel and shows it.
pub fn return_to_reel(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.gallery = None;
    let (state, task) = mount_reel(ctx);
    *ctx.reel = Some(state);
    *ctx.screen = Screen::Reel;
    task
}

/// Builds a reel starting on the home scene and requests media for the
/// scenes it starts out with.
pub fn mount_reel(ctx: &mut UpdateContext<'_>) -> (reel::State, Task<Message>) {
    let state = reel::State::new(
        ctx.catalog.len(),
        ctx.reel_settings,
        *ctx.window_width,
        Instant::now(),
    );
    let visited: Vec<usize> = state.visited().collect();
    let task = load_scene_media(ctx, &visited);
    (state, task)
}

/// Requests background loads for scenes that have not been requested yet.
pub fn load_scene_media(ctx: &mut UpdateContext<'_>, indices: &[usize]) -> Task<Message> {
    let claimed = ctx.media.claim(indices, ctx.catalog, ctx.asset_dir);
    Task::batch(claimed.into_iter().map(|(index, path)| {
        Task::perform(async move { media::load_scene_image(&path) }, move |result| {
            Message::SceneMediaLoaded { index, result }
        })
    }))
}

/// Stores loaded scene media and kicks off the home preview capture.
pub fn handle_scene_media_loaded(
    ctx: &mut UpdateContext<'_>,
    index: usize,
    result: Result<SceneImage, Error>,
) -> Task<Message> {
    match ctx.media.finish(index, result, ctx.catalog) {
        Some(capture) => Task::perform(async move { capture.run() }, Message::PreviewStored),
        None => Task::none(),
    }
}

pub fn handle_gallery_message(ctx: &mut UpdateContext<'_>, message: gallery::Message) -> Task<Message> {
    let Some(state) = ctx.gallery.as_mut() else {
        return Task::none();
    };

    match state.update(message) {
        GalleryEvent::None => Task::none(),
        GalleryEvent::Close => return_to_reel(ctx),
        GalleryEvent::ImageFailed(error) => {
            ctx.notifications
                .push(Notification::from_error(&error, Instant::now()));
            Task::none()
        }
    }
}

pub fn handle_vita_message(ctx: &mut UpdateContext<'_>, message: &vita::Message) -> Task<Message> {
    match vita::update(message) {
        VitaEvent::Close => return_to_reel(ctx),
    }
}

pub fn handle_legal_message(ctx: &mut UpdateContext<'_>, message: &legal::Message) -> Task<Message> {
    match legal::update(message) {
        LegalEvent::Close => return_to_reel(ctx),
    }
}

pub fn handle_contact_message(ctx: &mut UpdateContext<'_>, message: contact::Message) -> Task<Message> {
    match ctx.contact.update(message) {
        ContactEvent::None => Task::none(),
        ContactEvent::Close => return_to_reel(ctx),
    }
}

/// Escape on a content screen.
pub fn handle_close_screen(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.screen.is_content() {
        return_to_reel(ctx)
    } else {
        Task::none()
    }
}

/// Records the window width and lets a mounted reel resize its dot strip.
pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    *ctx.window_width = size.width;
    handle_reel_message(
        ctx,
        reel::Message::RawEvent(event::Event::Window(window::Event::Resized(size))),
    )
}

/// Advances banner expiry and the reel's countdowns.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.notifications.tick(now);

    if ctx.reel.as_ref().is_some_and(reel::State::needs_ticks) {
        handle_reel_message(ctx, reel::Message::Tick(now))
    } else {
        Task::none()
    }
}

pub fn handle_preview_stored(result: Result<(), Error>) -> Task<Message> {
    match result {
        Ok(()) => log::debug!("Stored home preview frame"),
        Err(err) => log::debug!("Could not store home preview frame: {}", err),
    }
    Task::none()
}
