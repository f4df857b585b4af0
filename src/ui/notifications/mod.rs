// SPDX-License-Identifier: MPL-2.0
//! Banner notifications for problems the user should know about.
//!
//! Startup warnings (unreadable settings, rejected scene list) and media
//! errors are pushed as i18n keys and rendered as small banners in the
//! top-right corner. Warnings dismiss themselves; errors stay until closed.
//!
//! - [`notification`] - `Notification` and its `Severity`
//! - [`manager`] - queue and expiry handling
//! - [`banner`] - rendering

mod banner;
mod manager;
mod notification;

pub use banner::view_overlay;
pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
