// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core portfolio logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) so the navigator
//! can be driven deterministically from tests and benches.
//!
//! # Modules
//!
//! - [`navigation`]: Scene navigator state machine and input adapters
//!   ([`SceneNavigator`](navigation::SceneNavigator),
//!   [`WheelGate`](navigation::WheelGate), [`SwipeTracker`](navigation::SwipeTracker))
//! - [`scene`]: Scene catalog ([`SceneCatalog`](scene::SceneCatalog),
//!   [`Scene`](scene::Scene), [`ProjectInfo`](scene::ProjectInfo))
//! - [`vita`]: Vita timeline parser ([`parse_vita`](vita::parse_vita))

pub mod navigation;
pub mod scene;
pub mod vita;
