// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module handles routing of native events (keyboard, wheel, touch,
//! window) to the appropriate screen components based on the current screen.

use super::{Message, Screen};
use crate::ui::gallery;
use crate::ui::reel;
use iced::{event, keyboard, mouse, time, window, Subscription};
use std::time::Duration;

/// Tick interval while the reel has a countdown or pulse running.
const REEL_TICK: Duration = Duration::from_millis(16);

/// Tick interval while only banners need expiring.
const NOTIFICATION_TICK: Duration = Duration::from_millis(250);

/// Creates the appropriate event subscription based on the current screen.
///
/// - Reel: wheel and touch always go to the reel so it can navigate even
///   while the pointer is over a button; keys only when no widget took them.
/// - Gallery: uncaptured keys drive the lightbox.
/// - Vita/Legal/Contact: uncaptured Escape closes the screen; the wheel is
///   left to the scrollable content.
///
/// Window resizes are reported on every screen so a remounted reel knows
/// the window width.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Reel => event::listen_with(|event, status, _window| {
            if let event::Event::Window(window::Event::Resized(size)) = &event {
                return Some(Message::WindowResized(*size));
            }

            if matches!(
                event,
                event::Event::Mouse(mouse::Event::WheelScrolled { .. }) | event::Event::Touch(_)
            ) {
                return Some(Message::Reel(reel::Message::RawEvent(event)));
            }

            if status == event::Status::Ignored && matches!(event, event::Event::Keyboard(_)) {
                return Some(Message::Reel(reel::Message::RawEvent(event)));
            }
            None
        }),
        Screen::Gallery => event::listen_with(|event, status, _window| {
            if let event::Event::Window(window::Event::Resized(size)) = &event {
                return Some(Message::WindowResized(*size));
            }

            if status == event::Status::Ignored && matches!(event, event::Event::Keyboard(_)) {
                return Some(Message::Gallery(gallery::Message::RawEvent(event)));
            }
            None
        }),
        Screen::Vita | Screen::Legal | Screen::Contact => {
            event::listen_with(|event, status, _window| match event {
                event::Event::Window(window::Event::Resized(size)) => {
                    Some(Message::WindowResized(size))
                }
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Escape),
                    ..
                }) if status == event::Status::Ignored => Some(Message::CloseScreen),
                _ => None,
            })
        }
    }
}

/// Creates the periodic tick: fast while the reel animates, slow while only
/// banners are up, none otherwise.
pub fn create_tick_subscription(reel_needs_ticks: bool, has_notifications: bool) -> Subscription<Message> {
    match tick_interval(reel_needs_ticks, has_notifications) {
        Some(interval) => time::every(interval).map(Message::Tick),
        None => Subscription::none(),
    }
}

fn tick_interval(reel_needs_ticks: bool, has_notifications: bool) -> Option<Duration> {
    if reel_needs_ticks {
        Some(REEL_TICK)
    } else if has_notifications {
        Some(NOTIFICATION_TICK)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reel_animation_wins_over_banners() {
        assert_eq!(tick_interval(true, true), Some(REEL_TICK));
        assert_eq!(tick_interval(false, true), Some(NOTIFICATION_TICK));
        assert_eq!(tick_interval(false, false), None);
    }
}
