// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Transition timing**: Navigation cooldown and glitch pulse windows
//! - **Input thresholds**: Wheel and swipe dead zones
//! - **Content**: File names looked up inside the asset directory
//! - **Preview**: Cached home preview frame

// ==========================================================================
// Transition Timing Defaults
// ==========================================================================

/// Window after a transition during which further requests are ignored (ms).
pub const DEFAULT_COOLDOWN_MS: u64 = 650;

/// Length of the glitch pulse played on every transition (ms).
pub const DEFAULT_PULSE_MS: u64 = 760;

/// Shortest accepted cooldown or pulse (ms).
pub const MIN_TRANSITION_MS: u64 = 50;

/// Longest accepted cooldown or pulse (ms).
pub const MAX_TRANSITION_MS: u64 = 5_000;

// ==========================================================================
// Input Threshold Defaults
// ==========================================================================

/// Minimum absolute vertical wheel delta that navigates (pixel units).
pub const DEFAULT_WHEEL_THRESHOLD: f32 = 30.0;

/// Minimum vertical swipe distance that navigates (logical pixels).
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 80.0;

/// Smallest accepted wheel or swipe threshold.
pub const MIN_INPUT_THRESHOLD: f32 = 1.0;

/// Largest accepted wheel or swipe threshold.
pub const MAX_INPUT_THRESHOLD: f32 = 1_000.0;

/// Pixel units reported per wheel "line" by line-based mice.
pub const WHEEL_PIXELS_PER_LINE: f32 = 120.0;

// ==========================================================================
// Content Defaults
// ==========================================================================

/// Vita text file looked up in the asset directory.
pub const VITA_FILE: &str = "vita.txt";

/// Legal notice file looked up in the asset directory.
pub const LEGAL_FILE: &str = "legal.txt";

/// Address shown on the contact screen.
pub const CONTACT_EMAIL: &str = "christian@seemann.space";

// ==========================================================================
// Preview Frame Defaults
// ==========================================================================

/// File name of the cached home preview frame in the data directory.
pub const PREVIEW_FILE: &str = "home-preview.cbor";

/// JPEG quality used when capturing the preview frame.
pub const PREVIEW_JPEG_QUALITY: u8 = 80;

/// Longest side of the captured preview frame (pixels).
pub const PREVIEW_MAX_SIDE: u32 = 640;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TRANSITION_MS > 0);
    assert!(MAX_TRANSITION_MS >= MIN_TRANSITION_MS);
    assert!(DEFAULT_COOLDOWN_MS >= MIN_TRANSITION_MS);
    assert!(DEFAULT_COOLDOWN_MS <= MAX_TRANSITION_MS);
    assert!(DEFAULT_PULSE_MS >= MIN_TRANSITION_MS);
    assert!(DEFAULT_PULSE_MS <= MAX_TRANSITION_MS);

    assert!(MIN_INPUT_THRESHOLD > 0.0);
    assert!(MAX_INPUT_THRESHOLD > MIN_INPUT_THRESHOLD);
    assert!(DEFAULT_WHEEL_THRESHOLD >= MIN_INPUT_THRESHOLD);
    assert!(DEFAULT_WHEEL_THRESHOLD <= MAX_INPUT_THRESHOLD);
    assert!(DEFAULT_SWIPE_THRESHOLD >= MIN_INPUT_THRESHOLD);
    assert!(DEFAULT_SWIPE_THRESHOLD <= MAX_INPUT_THRESHOLD);
    assert!(WHEEL_PIXELS_PER_LINE >= DEFAULT_WHEEL_THRESHOLD);

    assert!(PREVIEW_JPEG_QUALITY > 0);
    assert!(PREVIEW_JPEG_QUALITY <= 100);
    assert!(PREVIEW_MAX_SIDE > 0);
};
