// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Reel,
    Gallery,
    Vita,
    Legal,
    Contact,
}

impl Screen {
    /// Returns `true` for the screens that sit on top of the reel.
    #[must_use]
    pub fn is_content(self) -> bool {
        !matches!(self, Screen::Reel)
    }
}
