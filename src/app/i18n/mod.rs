// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - `.ftl` translation files embedded in the binary
//! - Runtime language switching
//! - Fallback to `en-US` when a locale is not shipped

pub mod fluent;
