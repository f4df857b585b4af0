// SPDX-License-Identifier: MPL-2.0
//! Navigation newtypes.
//!
//! Type-safe wrappers for the reel's timing windows and input dead zones.
//! The cooldown and the pulse are separate types on purpose: they are driven
//! by independent countdowns and must stay independently configurable.

use std::time::Duration;

// =============================================================================
// Bounds
// =============================================================================

/// Timing bounds for the transition cooldown and the glitch pulse (milliseconds).
pub mod timing_bounds {
    /// Default cooldown window after a transition starts.
    pub const DEFAULT_COOLDOWN_MS: u64 = 650;
    /// Default glitch pulse window after a transition starts.
    pub const DEFAULT_PULSE_MS: u64 = 760;
    /// Shortest accepted window.
    pub const MIN_MS: u64 = 50;
    /// Longest accepted window.
    pub const MAX_MS: u64 = 5_000;
}

/// Input dead-zone bounds (wheel units / touch pixels).
pub mod threshold_bounds {
    /// Default minimum vertical wheel delta.
    pub const DEFAULT_WHEEL: f32 = 30.0;
    /// Default minimum vertical swipe distance.
    pub const DEFAULT_SWIPE: f32 = 80.0;
    /// Smallest accepted threshold.
    pub const MIN: f32 = 1.0;
    /// Largest accepted threshold.
    pub const MAX: f32 = 1_000.0;
}

// =============================================================================
// CooldownMs
// =============================================================================

/// Length of the window during which further transition requests are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooldownMs(u64);

impl CooldownMs {
    /// Creates a cooldown, clamping to the valid range.
    #[must_use]
    pub fn new(ms: u64) -> Self {
        Self(ms.clamp(timing_bounds::MIN_MS, timing_bounds::MAX_MS))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for CooldownMs {
    fn default() -> Self {
        Self(timing_bounds::DEFAULT_COOLDOWN_MS)
    }
}

// =============================================================================
// PulseMs
// =============================================================================

/// Length of the cosmetic glitch pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseMs(u64);

impl PulseMs {
    /// Creates a pulse length, clamping to the valid range.
    #[must_use]
    pub fn new(ms: u64) -> Self {
        Self(ms.clamp(timing_bounds::MIN_MS, timing_bounds::MAX_MS))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for PulseMs {
    fn default() -> Self {
        Self(timing_bounds::DEFAULT_PULSE_MS)
    }
}

// =============================================================================
// WheelThreshold
// =============================================================================

/// Minimum absolute vertical wheel delta that counts as a navigation gesture.
///
/// Smaller deltas are trackpad jitter and are dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelThreshold(f32);

impl WheelThreshold {
    /// Creates a threshold, clamping to the valid range. Non-finite input
    /// falls back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if !value.is_finite() {
            return Self::default();
        }
        Self(value.clamp(threshold_bounds::MIN, threshold_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for WheelThreshold {
    fn default() -> Self {
        Self(threshold_bounds::DEFAULT_WHEEL)
    }
}

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Minimum vertical travel of a single finger before a swipe navigates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a threshold, clamping to the valid range. Non-finite input
    /// falls back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if !value.is_finite() {
            return Self::default();
        }
        Self(value.clamp(threshold_bounds::MIN, threshold_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(threshold_bounds::DEFAULT_SWIPE)
    }
}
