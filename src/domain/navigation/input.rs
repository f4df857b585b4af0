// SPDX-License-Identifier: MPL-2.0
//! Input adapters that turn raw device gestures into navigation commands.
//!
//! These types know nothing about the windowing toolkit: the UI layer feeds
//! them plain numbers (key identity, vertical deltas, finger positions) and
//! forwards whatever [`NavCommand`] comes out to the navigator.

use super::newtypes::{SwipeThreshold, WheelThreshold};

/// A navigation request derived from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    /// Move by the given number of scenes.
    Relative(isize),
    /// Jump to the first scene.
    First,
    /// Jump to the last scene.
    Last,
    /// Jump to an absolute scene index.
    Goto(usize),
}

impl NavCommand {
    /// Resolves the command to an absolute target for a reel whose active
    /// index is `active` and whose last index is `last`.
    #[must_use]
    pub fn target(self, active: usize, last: usize) -> usize {
        match self {
            Self::Relative(delta) => active.saturating_add_signed(delta).min(last),
            Self::First => 0,
            Self::Last => last,
            Self::Goto(index) => index.min(last),
        }
    }
}

/// Keys the reel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    ArrowLeft,
    ArrowRight,
    PageDown,
    PageUp,
    Space,
    Enter,
    Home,
    End,
}

impl NavKey {
    #[must_use]
    pub fn command(self) -> NavCommand {
        match self {
            Self::ArrowDown | Self::ArrowRight | Self::PageDown | Self::Space | Self::Enter => {
                NavCommand::Relative(1)
            }
            Self::ArrowUp | Self::ArrowLeft | Self::PageUp => NavCommand::Relative(-1),
            Self::Home => NavCommand::First,
            Self::End => NavCommand::Last,
        }
    }
}

/// Drops small wheel deltas and turns the rest into a single step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WheelGate {
    threshold: WheelThreshold,
}

impl WheelGate {
    #[must_use]
    pub fn new(threshold: WheelThreshold) -> Self {
        Self { threshold }
    }

    /// Maps a vertical wheel delta (positive = content moves up, i.e. the user
    /// scrolls down) to a step of +1 or -1.
    #[must_use]
    pub fn command(&self, delta_y: f32) -> Option<NavCommand> {
        if !delta_y.is_finite() || delta_y.abs() < self.threshold.value() {
            return None;
        }
        Some(NavCommand::Relative(if delta_y > 0.0 { 1 } else { -1 }))
    }
}

/// Single-finger vertical swipe recognizer.
///
/// A swipe consumes its touch: once a command is emitted the origin is
/// cleared and the finger has to be lifted and put down again.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    threshold: SwipeThreshold,
    origin: Option<TouchOrigin>,
    fingers_down: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct TouchOrigin {
    finger: u64,
    y: f32,
}

impl SwipeTracker {
    #[must_use]
    pub fn new(threshold: SwipeThreshold) -> Self {
        Self {
            threshold,
            origin: None,
            fingers_down: 0,
        }
    }

    /// Returns `true` while a swipe origin is recorded.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }

    /// A finger touched down. Only a lone finger starts tracking; a second
    /// finger cancels the gesture.
    pub fn press(&mut self, finger: u64, y: f32) {
        self.fingers_down += 1;
        self.origin = (self.fingers_down == 1).then_some(TouchOrigin { finger, y });
    }

    /// A finger moved. `blocked` is true while a transition is in flight; the
    /// move is then ignored but the origin is kept.
    pub fn moved(&mut self, finger: u64, y: f32, blocked: bool) -> Option<NavCommand> {
        let origin = self.origin.filter(|origin| origin.finger == finger)?;
        if blocked {
            return None;
        }

        let delta = origin.y - y;
        if !delta.is_finite() || delta.abs() < self.threshold.value() {
            return None;
        }

        self.origin = None;
        Some(NavCommand::Relative(if delta > 0.0 { 1 } else { -1 }))
    }

    /// A finger was lifted.
    pub fn lift(&mut self, _finger: u64) {
        self.fingers_down = self.fingers_down.saturating_sub(1);
        self.origin = None;
    }

    /// The platform cancelled a touch.
    pub fn lost(&mut self, finger: u64) {
        self.lift(finger);
    }

    /// Forgets every finger.
    pub fn reset(&mut self) {
        self.origin = None;
        self.fingers_down = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_keys_step_down() {
        for key in [
            NavKey::ArrowDown,
            NavKey::ArrowRight,
            NavKey::PageDown,
            NavKey::Space,
            NavKey::Enter,
        ] {
            assert_eq!(key.command(), NavCommand::Relative(1), "{key:?}");
        }
    }

    #[test]
    fn backward_keys_step_up() {
        for key in [NavKey::ArrowUp, NavKey::ArrowLeft, NavKey::PageUp] {
            assert_eq!(key.command(), NavCommand::Relative(-1), "{key:?}");
        }
    }

    #[test]
    fn home_and_end_jump_to_bounds() {
        assert_eq!(NavKey::Home.command().target(3, 6), 0);
        assert_eq!(NavKey::End.command().target(3, 6), 6);
    }

    #[test]
    fn relative_target_saturates() {
        assert_eq!(NavCommand::Relative(-1).target(0, 6), 0);
        assert_eq!(NavCommand::Relative(1).target(6, 6), 6);
        assert_eq!(NavCommand::Goto(42).target(1, 6), 6);
    }

    #[test]
    fn small_wheel_deltas_are_dropped() {
        let gate = WheelGate::default();
        assert_eq!(gate.command(10.0), None);
        assert_eq!(gate.command(-29.9), None);
    }

    #[test]
    fn large_wheel_deltas_step_once() {
        let gate = WheelGate::default();
        assert_eq!(gate.command(40.0), Some(NavCommand::Relative(1)));
        assert_eq!(gate.command(-30.0), Some(NavCommand::Relative(-1)));
        assert_eq!(gate.command(f32::NAN), None);
    }

    #[test]
    fn short_swipe_is_ignored() {
        let mut tracker = SwipeTracker::default();
        tracker.press(1, 500.0);
        assert_eq!(tracker.moved(1, 450.0, false), None);
        assert!(tracker.is_tracking());
    }

    #[test]
    fn upward_swipe_moves_forward_and_consumes_touch() {
        let mut tracker = SwipeTracker::default();
        tracker.press(1, 500.0);

        assert_eq!(tracker.moved(1, 380.0, false), Some(NavCommand::Relative(1)));
        assert!(!tracker.is_tracking());
        assert_eq!(tracker.moved(1, 100.0, false), None);
    }

    #[test]
    fn downward_swipe_moves_back() {
        let mut tracker = SwipeTracker::default();
        tracker.press(7, 200.0);
        assert_eq!(tracker.moved(7, 320.0, false), Some(NavCommand::Relative(-1)));
    }

    #[test]
    fn blocked_move_keeps_origin() {
        let mut tracker = SwipeTracker::default();
        tracker.press(1, 500.0);

        assert_eq!(tracker.moved(1, 300.0, true), None);
        assert!(tracker.is_tracking());
        assert_eq!(tracker.moved(1, 300.0, false), Some(NavCommand::Relative(1)));
    }

    #[test]
    fn second_finger_cancels_tracking() {
        let mut tracker = SwipeTracker::default();
        tracker.press(1, 500.0);
        tracker.press(2, 500.0);

        assert!(!tracker.is_tracking());
        assert_eq!(tracker.moved(1, 100.0, false), None);
    }

    #[test]
    fn lift_and_loss_reset_the_tracker() {
        let mut tracker = SwipeTracker::default();
        tracker.press(1, 500.0);
        tracker.lift(1);
        assert!(!tracker.is_tracking());

        tracker.press(2, 500.0);
        tracker.lost(2);
        assert_eq!(tracker.moved(2, 100.0, false), None);

        tracker.press(3, 500.0);
        assert!(tracker.is_tracking());
    }
}
