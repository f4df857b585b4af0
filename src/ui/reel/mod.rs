// SPDX-License-Identifier: MPL-2.0
//! The scene reel: a full-window stage that shows one scene at a time.
//!
//! This component owns the [`SceneNavigator`] for as long as the reel is on
//! screen and feeds it from raw window events (keyboard, vertical wheel,
//! single-finger swipes) and from clicks on the navigation dots. Accepted
//! transitions bubble up as [`Effect::Visited`] so the application can load
//! media for scenes that just became visible, and scroll the dot strip.
//!
//! The state is created when the reel mounts and dropped when another
//! screen takes over; [`State::teardown`] cancels any pending countdown.

pub mod nav_strip;
mod view;

pub use view::ViewContext;

use crate::domain::navigation::{
    NavCommand, NavKey, NavigationSnapshot, NavigatorTiming, SceneNavigator, SwipeThreshold,
    SwipeTracker, WheelGate, WheelThreshold,
};
use crate::ui::design_tokens::spacing;
use iced::widget::scrollable::Viewport;
use iced::{event, keyboard, mouse, touch, window, Element, Task};
use std::time::Instant;

/// Pixel units reported per wheel "line" by line-based mice.
const WHEEL_PIXELS_PER_LINE: f32 = crate::app::config::WHEEL_PIXELS_PER_LINE;

/// Tunables taken from the settings file.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReelSettings {
    pub timing: NavigatorTiming,
    pub wheel_threshold: WheelThreshold,
    pub swipe_threshold: SwipeThreshold,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Window event routed by the application subscription.
    RawEvent(event::Event),
    /// Clock tick while a countdown is pending.
    Tick(Instant),
    DotPressed(usize),
    StripScrolled(Viewport),
    /// The scene's call to action was clicked.
    OpenScene(usize),
    OpenLegal,
    OpenContact,
}

/// Side effects the application performs after a reel message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A transition was accepted; these scenes were seen for the first time.
    Visited(Vec<usize>),
    OpenScene(usize),
    OpenLegal,
    OpenContact,
}

#[derive(Debug, Clone)]
pub struct State {
    navigator: SceneNavigator,
    wheel: WheelGate,
    swipe: SwipeTracker,
    strip: nav_strip::Strip,
    /// Time of the last handled message, drives the pulse animation.
    now: Instant,
}

impl State {
    /// Mounts a reel over `scene_count` scenes, starting on the first one.
    #[must_use]
    pub fn new(scene_count: usize, settings: ReelSettings, window_width: f32, now: Instant) -> Self {
        Self {
            navigator: SceneNavigator::new(scene_count, settings.timing),
            wheel: WheelGate::new(settings.wheel_threshold),
            swipe: SwipeTracker::new(settings.swipe_threshold),
            strip: nav_strip::Strip::new(scene_count, strip_width(window_width)),
            now,
        }
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.navigator.active_index()
    }

    #[must_use]
    pub fn snapshot(&self) -> NavigationSnapshot {
        self.navigator.snapshot()
    }

    /// Scenes whose media may be mounted.
    pub fn visited(&self) -> impl Iterator<Item = usize> + '_ {
        self.navigator.visited().iter().copied()
    }

    /// Returns `true` while the application should keep delivering ticks.
    #[must_use]
    pub fn needs_ticks(&self) -> bool {
        self.navigator.has_pending_timers()
    }

    /// Fraction of the glitch pulse already played.
    #[must_use]
    pub fn pulse_progress(&self) -> Option<f32> {
        self.navigator.pulse_progress(self.now)
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.navigator.is_transitioning()
    }

    /// Cancels the pending countdowns and forgets any touch in progress.
    pub fn teardown(&mut self) {
        self.navigator.teardown();
        self.swipe.reset();
    }

    pub fn handle_message(&mut self, message: Message, now: Instant) -> (Effect, Task<Message>) {
        self.now = now;

        match message {
            Message::RawEvent(event) => self.handle_raw_event(event, now),
            Message::Tick(_) => {
                self.navigator.tick(now);
                (Effect::None, Task::none())
            }
            Message::DotPressed(index) => self.navigate(NavCommand::Goto(index), now),
            Message::StripScrolled(viewport) => {
                self.strip.observe(&viewport);
                (Effect::None, Task::none())
            }
            Message::OpenScene(index) => (Effect::OpenScene(index), Task::none()),
            Message::OpenLegal => (Effect::OpenLegal, Task::none()),
            Message::OpenContact => (Effect::OpenContact, Task::none()),
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        view::view(self, ctx)
    }

    fn handle_raw_event(&mut self, event: event::Event, now: Instant) -> (Effect, Task<Message>) {
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                self.handle_key(&key, now)
            }
            event::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                match self.wheel.command(wheel_delta_y(delta)) {
                    Some(command) => self.navigate(command, now),
                    None => (Effect::None, Task::none()),
                }
            }
            event::Event::Touch(touch_event) => self.handle_touch(touch_event, now),
            event::Event::Window(window::Event::Resized(size)) => {
                self.strip.set_viewport_width(strip_width(size.width));
                (Effect::None, Task::none())
            }
            _ => (Effect::None, Task::none()),
        }
    }

    fn handle_key(&mut self, key: &keyboard::Key, now: Instant) -> (Effect, Task<Message>) {
        match nav_key(key) {
            Some(nav_key) => self.navigate(nav_key.command(), now),
            None => (Effect::None, Task::none()),
        }
    }

    fn handle_touch(&mut self, event: touch::Event, now: Instant) -> (Effect, Task<Message>) {
        match event {
            touch::Event::FingerPressed { id, position } => {
                self.swipe.press(id.0, position.y);
                (Effect::None, Task::none())
            }
            touch::Event::FingerMoved { id, position } => {
                self.navigator.tick(now);
                let blocked = self.navigator.is_transitioning();
                match self.swipe.moved(id.0, position.y, blocked) {
                    Some(command) => self.navigate(command, now),
                    None => (Effect::None, Task::none()),
                }
            }
            touch::Event::FingerLifted { id, .. } => {
                self.swipe.lift(id.0);
                (Effect::None, Task::none())
            }
            touch::Event::FingerLost { id, .. } => {
                self.swipe.lost(id.0);
                (Effect::None, Task::none())
            }
        }
    }

    fn navigate(&mut self, command: NavCommand, now: Instant) -> (Effect, Task<Message>) {
        // Deadlines that passed since the last tick fire before the input is judged.
        self.navigator.tick(now);
        if self.navigator.is_transitioning() {
            return (Effect::None, Task::none());
        }

        let target = command.target(self.navigator.active_index(), self.navigator.last_index());
        match self.navigator.request_transition(target, now) {
            Some(transition) => {
                log::debug!("Reel transition {} -> {}", transition.from, transition.to);
                let scroll = self.strip.scroll_to(transition.to);
                (Effect::Visited(transition.newly_visited), scroll)
            }
            None => (Effect::None, Task::none()),
        }
    }
}

/// Maps a key to a reel command key, `None` for keys the reel ignores.
fn nav_key(key: &keyboard::Key) -> Option<NavKey> {
    use keyboard::key::Named;

    match key {
        keyboard::Key::Named(named) => match named {
            Named::ArrowDown => Some(NavKey::ArrowDown),
            Named::ArrowUp => Some(NavKey::ArrowUp),
            Named::ArrowLeft => Some(NavKey::ArrowLeft),
            Named::ArrowRight => Some(NavKey::ArrowRight),
            Named::PageDown => Some(NavKey::PageDown),
            Named::PageUp => Some(NavKey::PageUp),
            Named::Space => Some(NavKey::Space),
            Named::Enter => Some(NavKey::Enter),
            Named::Home => Some(NavKey::Home),
            Named::End => Some(NavKey::End),
            _ => None,
        },
        _ => None,
    }
}

/// Vertical wheel delta in pixel units, positive when the user scrolls down.
fn wheel_delta_y(delta: mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => -y * WHEEL_PIXELS_PER_LINE,
        mouse::ScrollDelta::Pixels { y, .. } => -y,
    }
}

/// Width available to the dot strip in a window `window_width` wide.
fn strip_width(window_width: f32) -> f32 {
    window_width - 2.0 * spacing::MD
}
