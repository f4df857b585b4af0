// SPDX-License-Identifier: MPL-2.0
//! Scene navigation domain types.
//!
//! The [`SceneNavigator`] owns the active scene index; input adapters
//! ([`WheelGate`], [`SwipeTracker`], [`NavKey`]) translate device gestures
//! into [`NavCommand`]s for it. Nothing here depends on the GUI toolkit and
//! time is always injected by the caller.

mod countdown;
mod input;
mod navigator;
pub mod newtypes;

pub use countdown::Countdown;
pub use input::{NavCommand, NavKey, SwipeTracker, WheelGate};
pub use navigator::{NavigationSnapshot, NavigatorTiming, Phase, SceneNavigator, Transition};
pub use newtypes::{CooldownMs, PulseMs, SwipeThreshold, WheelThreshold};
