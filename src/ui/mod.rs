// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`reel`] - Full-window scene reel with glitch transitions and navigation dots
//! - [`gallery`] - Project gallery with lightbox
//! - [`vita`] - Exhibition and project timeline
//! - [`legal`] - Legal notice
//! - [`contact`] - Contact form
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Warning banners for user feedback

pub mod contact;
pub mod design_tokens;
pub mod gallery;
pub mod legal;
pub mod notifications;
pub mod reel;
pub mod styles;
pub mod theming;
pub mod vita;
