// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::SceneImage;
use crate::ui::contact;
use crate::ui::gallery;
use crate::ui::legal;
use crate::ui::notifications;
use crate::ui::reel;
use crate::ui::vita;
use iced::Size;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Reel(reel::Message),
    Gallery(gallery::Message),
    Vita(vita::Message),
    Legal(legal::Message),
    Contact(contact::Message),
    Notification(notifications::NotificationMessage),
    /// Escape pressed on a content screen.
    CloseScreen,
    WindowResized(Size),
    /// Periodic tick for countdowns and banner expiry.
    Tick(Instant),
    /// Background load of a scene's media finished.
    SceneMediaLoaded {
        index: usize,
        result: Result<SceneImage, Error>,
    },
    /// Result of writing the home preview frame.
    PreviewStored(Result<(), Error>),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `de`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (home preview cache).
    /// Takes precedence over `SCENE_REEL_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SCENE_REEL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Asset directory replacing the configured one.
    pub assets: Option<PathBuf>,
    /// Scene catalog replacing the configured one.
    pub scenes: Option<PathBuf>,
}
