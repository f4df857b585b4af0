// SPDX-License-Identifier: MPL-2.0
//! Scene navigator: the single authority over the active scene index.
//!
//! The navigator is a two-state machine. In `Idle` any request for a
//! different scene is accepted immediately; the index changes and two
//! independent countdowns start (cooldown and glitch pulse). While the
//! cooldown is pending the navigator is `Transitioning` and every request is
//! dropped, with no queueing. When both countdowns have elapsed it is `Idle`
//! again.
//!
//! Every accepted transition also marks the target and its immediate
//! neighbours as visited so the rendering layer can mount their media ahead
//! of time. The visited set only ever grows.

use super::countdown::Countdown;
use super::newtypes::{CooldownMs, PulseMs};
use std::collections::BTreeSet;
use std::time::Instant;

/// Durations for the two countdowns started by a transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigatorTiming {
    pub cooldown: CooldownMs,
    pub pulse: PulseMs,
}

/// Logical state of the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning,
}

/// Outcome of an accepted transition request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Index that was active before the request.
    pub from: usize,
    /// Index that is active now.
    pub to: usize,
    /// Indices that entered the visited set with this transition, ascending.
    pub newly_visited: Vec<usize>,
}

/// Read-only copy of the navigation state handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationSnapshot {
    pub active_index: usize,
    pub is_transitioning: bool,
    pub is_pulse_active: bool,
    pub visited: BTreeSet<usize>,
}

#[derive(Debug, Clone)]
pub struct SceneNavigator {
    scene_count: usize,
    active_index: usize,
    timing: NavigatorTiming,
    cooldown: Countdown,
    pulse: Countdown,
    visited: BTreeSet<usize>,
}

impl SceneNavigator {
    /// Mounts a navigator over `scene_count` scenes, starting on scene 0.
    ///
    /// A scene count of zero is treated as one so the index invariant holds.
    #[must_use]
    pub fn new(scene_count: usize, timing: NavigatorTiming) -> Self {
        Self {
            scene_count: scene_count.max(1),
            active_index: 0,
            timing,
            cooldown: Countdown::new(),
            pulse: Countdown::new(),
            visited: BTreeSet::from([0]),
        }
    }

    #[must_use]
    pub fn scene_count(&self) -> usize {
        self.scene_count
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.scene_count - 1
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    #[must_use]
    pub fn timing(&self) -> NavigatorTiming {
        self.timing
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.cooldown.is_pending()
    }

    #[must_use]
    pub fn is_pulse_active(&self) -> bool {
        self.pulse.is_pending()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_transitioning() {
            Phase::Transitioning
        } else {
            Phase::Idle
        }
    }

    #[must_use]
    pub fn visited(&self) -> &BTreeSet<usize> {
        &self.visited
    }

    #[must_use]
    pub fn is_visited(&self, index: usize) -> bool {
        self.visited.contains(&index)
    }

    /// Returns `true` while either countdown still has to fire.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        self.cooldown.is_pending() || self.pulse.is_pending()
    }

    /// Fraction of the glitch pulse already played, `None` when no pulse runs.
    #[must_use]
    pub fn pulse_progress(&self, now: Instant) -> Option<f32> {
        self.pulse.progress(now)
    }

    #[must_use]
    pub fn snapshot(&self) -> NavigationSnapshot {
        NavigationSnapshot {
            active_index: self.active_index,
            is_transitioning: self.is_transitioning(),
            is_pulse_active: self.is_pulse_active(),
            visited: self.visited.clone(),
        }
    }

    /// Requests a jump to `target`.
    ///
    /// The target is clamped to the last scene. The request is dropped while
    /// a transition is in flight or when the clamped target is already active.
    pub fn request_transition(&mut self, target: usize, now: Instant) -> Option<Transition> {
        if self.is_transitioning() {
            return None;
        }

        let target = target.min(self.last_index());
        if target == self.active_index {
            return None;
        }

        let from = self.active_index;
        self.active_index = target;
        self.cooldown.arm(now, self.timing.cooldown.as_duration());
        self.pulse.arm(now, self.timing.pulse.as_duration());
        let newly_visited = self.mark_neighbourhood(target);

        Some(Transition {
            from,
            to: target,
            newly_visited,
        })
    }

    /// Requests a move of `delta` scenes from the active one.
    ///
    /// Moving before the first scene clamps to 0, moving past the last scene
    /// clamps to the last one.
    pub fn request_relative(&mut self, delta: isize, now: Instant) -> Option<Transition> {
        let target = self.active_index.saturating_add_signed(delta);
        self.request_transition(target, now)
    }

    /// Fires elapsed countdowns. Returns `true` when a flag changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let cooldown_elapsed = self.cooldown.poll(now);
        let pulse_elapsed = self.pulse.poll(now);
        cooldown_elapsed || pulse_elapsed
    }

    /// Cancels both countdowns. Called when the reel view is torn down so no
    /// pending deadline outlives it.
    pub fn teardown(&mut self) {
        self.cooldown.cancel();
        self.pulse.cancel();
    }

    fn mark_neighbourhood(&mut self, index: usize) -> Vec<usize> {
        let low = index.saturating_sub(1);
        let high = (index + 1).min(self.last_index());
        (low..=high)
            .filter(|candidate| self.visited.insert(*candidate))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const SCENES: usize = 7;

    fn navigator() -> SceneNavigator {
        SceneNavigator::new(SCENES, NavigatorTiming::default())
    }

    fn after(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    #[test]
    fn mounts_idle_on_first_scene() {
        let nav = navigator();
        assert_eq!(nav.active_index(), 0);
        assert_eq!(nav.phase(), Phase::Idle);
        assert!(!nav.is_pulse_active());
        assert_eq!(nav.visited(), &BTreeSet::from([0]));
    }

    #[test]
    fn accepted_request_moves_and_starts_both_countdowns() {
        let start = Instant::now();
        let mut nav = navigator();

        let transition = nav.request_transition(3, start).expect("accepted");

        assert_eq!(transition.from, 0);
        assert_eq!(transition.to, 3);
        assert_eq!(nav.active_index(), 3);
        assert_eq!(nav.phase(), Phase::Transitioning);
        assert!(nav.is_pulse_active());
    }

    #[test]
    fn requests_during_cooldown_are_dropped() {
        let start = Instant::now();
        let mut nav = navigator();
        nav.request_transition(1, start);
        let before = nav.snapshot();

        assert!(nav.request_transition(4, after(start, 100)).is_none());
        assert!(nav.request_relative(1, after(start, 200)).is_none());
        assert_eq!(nav.snapshot(), before);
    }

    #[test]
    fn request_for_active_scene_is_ignored() {
        let mut nav = navigator();
        assert!(nav.request_transition(0, Instant::now()).is_none());
        assert_eq!(nav.phase(), Phase::Idle);
    }

    #[test]
    fn out_of_range_target_is_clamped() {
        let mut nav = navigator();
        let transition = nav.request_transition(99, Instant::now()).unwrap();
        assert_eq!(transition.to, SCENES - 1);
    }

    #[test]
    fn relative_request_before_first_scene_is_noop() {
        let mut nav = navigator();
        assert!(nav.request_relative(-1, Instant::now()).is_none());
        assert_eq!(nav.active_index(), 0);
    }

    #[test]
    fn cooldown_and_pulse_expire_independently() {
        let start = Instant::now();
        let mut nav = navigator();
        nav.request_transition(1, start);

        assert!(nav.tick(after(start, 650)));
        assert_eq!(nav.phase(), Phase::Idle);
        assert!(nav.is_pulse_active());

        assert!(nav.tick(after(start, 760)));
        assert!(!nav.is_pulse_active());
        assert!(!nav.has_pending_timers());
    }

    #[test]
    fn request_accepted_again_after_cooldown() {
        let start = Instant::now();
        let mut nav = navigator();
        nav.request_transition(1, start);
        nav.tick(after(start, 650));

        let transition = nav.request_relative(1, after(start, 651));
        assert_eq!(transition.map(|t| t.to), Some(2));
    }

    #[test]
    fn new_transition_rearms_pending_pulse() {
        let start = Instant::now();
        let mut nav = navigator();
        nav.request_transition(1, start);
        nav.tick(after(start, 700));
        nav.request_transition(2, after(start, 700));

        // The first pulse would have ended at 760; the re-armed one runs to 1460.
        assert!(!nav.tick(after(start, 1_000)));
        assert!(nav.is_pulse_active());
        nav.tick(after(start, 1_460));
        assert!(!nav.is_pulse_active());
    }

    #[test]
    fn walking_down_reaches_last_scene() {
        let mut now = Instant::now();
        let mut nav = navigator();
        for _ in 0..6 {
            nav.request_relative(1, now);
            now += Duration::from_millis(800);
            nav.tick(now);
        }
        assert_eq!(nav.active_index(), 6);
        assert!(nav.request_relative(1, now).is_none());
    }

    #[test]
    fn visited_always_covers_target_and_neighbours() {
        let mut now = Instant::now();
        for target in 0..SCENES {
            let mut nav = navigator();
            nav.request_transition(target, now);
            let visited = nav.visited();
            let expected = [0, target, target.saturating_sub(1), (target + 1).min(SCENES - 1)];
            for index in expected {
                assert!(visited.contains(&index), "missing {index} for {target}");
            }
            now += Duration::from_millis(1);
        }
    }

    #[test]
    fn visited_set_never_shrinks_and_reports_new_entries() {
        let start = Instant::now();
        let mut nav = navigator();

        let first = nav.request_transition(2, start).unwrap();
        assert_eq!(first.newly_visited, vec![1, 2, 3]);

        nav.tick(after(start, 800));
        let second = nav.request_transition(3, after(start, 800)).unwrap();
        assert_eq!(second.newly_visited, vec![4]);
        assert_eq!(nav.visited(), &BTreeSet::from([0, 1, 2, 3, 4]));
    }

    #[test]
    fn teardown_cancels_pending_countdowns() {
        let start = Instant::now();
        let mut nav = navigator();
        nav.request_transition(1, start);
        nav.teardown();

        assert!(!nav.has_pending_timers());
        assert!(!nav.tick(after(start, 1_000)));
        assert_eq!(nav.active_index(), 1);
    }

    #[test]
    fn custom_timing_is_honoured() {
        let start = Instant::now();
        let timing = NavigatorTiming {
            cooldown: CooldownMs::new(100),
            pulse: PulseMs::new(300),
        };
        let mut nav = SceneNavigator::new(3, timing);
        nav.request_transition(1, start);

        nav.tick(after(start, 100));
        assert_eq!(nav.phase(), Phase::Idle);
        assert!(nav.is_pulse_active());
    }

    #[test]
    fn zero_scene_count_is_treated_as_one() {
        let mut nav = SceneNavigator::new(0, NavigatorTiming::default());
        assert_eq!(nav.scene_count(), 1);
        assert!(nav.request_relative(1, Instant::now()).is_none());
    }
}
