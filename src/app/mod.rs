// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the reel and the
//! content screens.
//!
//! The `App` struct wires together the domains (scene catalog, reel,
//! localization, content pages) and translates messages into side effects
//! like media loading or the home preview capture. Startup policy (window
//! size, where content comes from, which warnings are shown) stays close to
//! the main update loop so it is easy to audit user-facing behavior.

pub mod config;
pub mod i18n;
mod message;
pub mod paths;
mod scene_media;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use scene_media::{PreviewCapture, SceneMedia};
pub use screen::Screen;

use crate::content::catalog::load_catalog;
use crate::content::text::{load_legal, load_vita};
use crate::domain::scene::SceneCatalog;
use crate::domain::vita::Vita;
use crate::media::preview::PreviewCache;
use crate::ui::contact;
use crate::ui::gallery;
use crate::ui::notifications::{self, Notification};
use crate::ui::reel::{self, ReelSettings};
use crate::ui::theming::ThemeMode;
use config::Config;
use i18n::fluent::I18n;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state that bridges UI components, localization, and
/// loaded content.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    catalog: SceneCatalog,
    /// Present only while the reel is on screen.
    reel: Option<reel::State>,
    reel_settings: ReelSettings,
    gallery: Option<gallery::State>,
    contact: contact::State,
    vita: Vita,
    legal: Option<String>,
    media: SceneMedia,
    asset_dir: PathBuf,
    theme_mode: ThemeMode,
    notifications: notifications::Manager,
    window_width: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("scenes", &self.catalog.len())
            .field("reel_mounted", &self.reel.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot; the flags are only consumed once and a
    // repeated boot falls back to defaults.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and content, then mounts the reel on the home scene.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let scenes_file = flags.scenes.clone().or_else(|| config.content.scenes_file.clone());
        let (catalog, catalog_warning) = load_catalog(scenes_file.as_deref());
        let asset_dir = paths::resolve_asset_dir(flags.assets.clone(), config.content.asset_dir.clone());
        log::info!(
            "Showing {} scenes with assets from {}",
            catalog.len(),
            asset_dir.display()
        );

        let mut media = SceneMedia::new(catalog.len(), PreviewCache::new());
        media.restore_preview(&catalog);

        let mut app = Self::assemble(i18n, &config, catalog, asset_dir, media);

        let now = Instant::now();
        for key in [config_warning, catalog_warning].into_iter().flatten() {
            app.notifications.push(Notification::warning(key, now));
        }

        let task = app.mount_reel();
        (app, task)
    }

    /// Puts the application state together without mounting the reel.
    fn assemble(
        i18n: I18n,
        config: &Config,
        catalog: SceneCatalog,
        asset_dir: PathBuf,
        media: SceneMedia,
    ) -> Self {
        let vita = load_vita(&asset_dir);
        let legal = load_legal(&asset_dir);

        Self {
            i18n,
            screen: Screen::Reel,
            catalog,
            reel: None,
            reel_settings: ReelSettings {
                timing: config.navigation.timing(),
                wheel_threshold: config.navigation.wheel_threshold(),
                swipe_threshold: config.navigation.swipe_threshold(),
            },
            gallery: None,
            contact: contact::State::new(),
            vita,
            legal,
            media,
            asset_dir,
            theme_mode: config.general.theme_mode,
            notifications: notifications::Manager::new(),
            window_width: WINDOW_DEFAULT_WIDTH as f32,
        }
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            screen: &mut self.screen,
            catalog: &self.catalog,
            reel: &mut self.reel,
            reel_settings: self.reel_settings,
            gallery: &mut self.gallery,
            contact: &mut self.contact,
            media: &mut self.media,
            asset_dir: &self.asset_dir,
            notifications: &mut self.notifications,
            window_width: &mut self.window_width,
        }
    }

    fn mount_reel(&mut self) -> Task<Message> {
        update::return_to_reel(&mut self.update_context())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        let project = match self.screen {
            Screen::Gallery => self
                .gallery
                .as_ref()
                .and_then(|state| self.catalog.project(state.slug())),
            _ => None,
        };

        match project {
            Some(project) => format!("{} - {app_name}", project.title),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub = subscription::create_tick_subscription(
            self.reel.as_ref().is_some_and(reel::State::needs_ticks),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Reel(reel_message) => update::handle_reel_message(&mut ctx, reel_message),
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Vita(vita_message) => update::handle_vita_message(&mut ctx, &vita_message),
            Message::Legal(legal_message) => update::handle_legal_message(&mut ctx, &legal_message),
            Message::Contact(contact_message) => {
                update::handle_contact_message(&mut ctx, contact_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::CloseScreen => update::handle_close_screen(&mut ctx),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::SceneMediaLoaded { index, result } => {
                update::handle_scene_media_loaded(&mut ctx, index, result)
            }
            Message::PreviewStored(result) => update::handle_preview_stored(result),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            catalog: &self.catalog,
            reel: self.reel.as_ref(),
            gallery: self.gallery.as_ref(),
            contact: &self.contact,
            vita: &self.vita,
            legal: self.legal.as_deref(),
            media: self.media.images(),
            home_preview: self.media.home_preview(),
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::catalog::embedded_catalog;
    use crate::error::Error;
    use crate::ui::{legal, vita};
    use tempfile::TempDir;

    struct Fixture {
        app: App,
        _assets: TempDir,
        _data: TempDir,
    }

    fn fixture() -> Fixture {
        let assets = tempfile::tempdir().unwrap();
        let data = tempfile::tempdir().unwrap();
        let config = Config::default();
        let catalog = embedded_catalog().unwrap();
        let media = SceneMedia::new(
            catalog.len(),
            PreviewCache::with_override(Some(data.path().to_path_buf())),
        );
        let i18n = I18n::new(Some("en-US".to_string()), &config);

        let mut app = App::assemble(i18n, &config, catalog, assets.path().to_path_buf(), media);
        let _ = app.mount_reel();
        Fixture {
            app,
            _assets: assets,
            _data: data,
        }
    }

    fn first_project_index(app: &App) -> usize {
        app.catalog
            .iter()
            .position(|scene| scene.as_project().is_some())
            .unwrap()
    }

    #[test]
    fn starts_on_mounted_reel() {
        let fixture = fixture();
        assert_eq!(fixture.app.screen, Screen::Reel);
        assert_eq!(fixture.app.reel.as_ref().map(reel::State::active_index), Some(0));
        assert_eq!(fixture.app.title(), fixture.app.i18n.tr("window-title"));
    }

    #[test]
    fn opening_project_shows_gallery_and_unmounts_reel() {
        let mut fixture = fixture();
        let index = first_project_index(&fixture.app);

        let _ = fixture.app.update(Message::Reel(reel::Message::OpenScene(index)));

        assert_eq!(fixture.app.screen, Screen::Gallery);
        assert!(fixture.app.reel.is_none());
        assert!(fixture.app.gallery.is_some());
        let suffix = format!(" - {}", fixture.app.i18n.tr("window-title"));
        assert!(fixture.app.title().ends_with(&suffix));
    }

    #[test]
    fn closing_gallery_remounts_fresh_reel() {
        let mut fixture = fixture();
        let index = first_project_index(&fixture.app);
        let _ = fixture.app.update(Message::Reel(reel::Message::DotPressed(index)));
        let _ = fixture.app.update(Message::Reel(reel::Message::OpenScene(index)));

        let _ = fixture.app.update(Message::Gallery(gallery::Message::Close));

        assert_eq!(fixture.app.screen, Screen::Reel);
        assert!(fixture.app.gallery.is_none());
        assert_eq!(fixture.app.reel.as_ref().map(reel::State::active_index), Some(0));
    }

    #[test]
    fn home_scene_opens_nothing() {
        let mut fixture = fixture();
        let _ = fixture.app.update(Message::Reel(reel::Message::OpenScene(0)));
        assert_eq!(fixture.app.screen, Screen::Reel);
        assert!(fixture.app.reel.is_some());
    }

    #[test]
    fn vita_scene_opens_vita_screen() {
        let mut fixture = fixture();
        let last = fixture.app.catalog.len() - 1;

        let _ = fixture.app.update(Message::Reel(reel::Message::OpenScene(last)));
        assert_eq!(fixture.app.screen, Screen::Vita);

        let _ = fixture.app.update(Message::Vita(vita::Message::Close));
        assert_eq!(fixture.app.screen, Screen::Reel);
    }

    #[test]
    fn escape_closes_content_screens() {
        let mut fixture = fixture();
        let _ = fixture.app.update(Message::Reel(reel::Message::OpenLegal));
        assert_eq!(fixture.app.screen, Screen::Legal);

        let _ = fixture.app.update(Message::CloseScreen);
        assert_eq!(fixture.app.screen, Screen::Reel);

        let _ = fixture.app.update(Message::CloseScreen);
        assert_eq!(fixture.app.screen, Screen::Reel);
    }

    #[test]
    fn contact_form_is_reset_on_open() {
        let mut fixture = fixture();
        let _ = fixture.app.update(Message::Reel(reel::Message::OpenContact));
        let _ = fixture
            .app
            .update(Message::Contact(contact::Message::NameChanged("Ada".into())));
        let _ = fixture.app.update(Message::Contact(contact::Message::Submit));
        assert!(fixture.app.contact.error().is_some());

        let _ = fixture.app.update(Message::Contact(contact::Message::Close));
        let _ = fixture.app.update(Message::Reel(reel::Message::OpenContact));
        assert_eq!(fixture.app.screen, Screen::Contact);
        assert!(fixture.app.contact.error().is_none());
    }

    #[test]
    fn legal_close_returns_to_reel() {
        let mut fixture = fixture();
        let _ = fixture.app.update(Message::Reel(reel::Message::OpenLegal));
        let _ = fixture.app.update(Message::Legal(legal::Message::Close));
        assert_eq!(fixture.app.screen, Screen::Reel);
        assert!(fixture.app.legal.is_none());
    }

    #[test]
    fn gallery_image_failure_raises_banner() {
        let mut fixture = fixture();
        let index = first_project_index(&fixture.app);
        let _ = fixture.app.update(Message::Reel(reel::Message::OpenScene(index)));

        let _ = fixture.app.update(Message::Gallery(gallery::Message::ImageLoaded {
            index: 0,
            result: Err(Error::Image("truncated".into())),
        }));

        assert_eq!(fixture.app.notifications.visible_count(), 1);
    }

    #[test]
    fn scene_media_failure_is_silent() {
        let mut fixture = fixture();
        let _ = fixture.app.update(Message::SceneMediaLoaded {
            index: 0,
            result: Err(Error::Io("missing".into())),
        });

        assert!(!fixture.app.notifications.has_notifications());
        assert!(fixture.app.media.images()[0].is_none());
    }

    #[test]
    fn resize_is_remembered_for_the_next_reel() {
        let mut fixture = fixture();
        let _ = fixture
            .app
            .update(Message::WindowResized(iced::Size::new(900.0, 700.0)));
        assert!((fixture.app.window_width - 900.0).abs() < f32::EPSILON);
    }
}
