// SPDX-License-Identifier: MPL-2.0
//! `scene_reel` is a portfolio presented as a full-window reel of scenes,
//! built with the Iced GUI framework.
//!
//! The home intro, one scene per project and a vita scene are stepped
//! through with the keyboard, the mouse wheel, touch swipes or the
//! navigation dots, each transition covered by a short glitch pulse. Project
//! galleries, the vita timeline, the legal notice and a contact form sit
//! behind the scenes.

pub mod app;
pub mod content;
pub mod domain;
pub mod error;
pub mod media;
pub mod ui;
