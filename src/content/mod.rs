// SPDX-License-Identifier: MPL-2.0
//! Portfolio content: the scene catalog and the text pages.
//!
//! Built-in content lives in `assets/content/` and is embedded in the binary.
//! The asset directory on disk can replace the vita and provides the legal
//! notice and every image referenced by the catalog.

pub mod catalog;
pub mod text;

use rust_embed::RustEmbed;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct ContentAsset;

/// Returns an embedded content file as UTF-8 text.
pub(crate) fn embedded_text(name: &str) -> Option<String> {
    ContentAsset::get(name).map(|file| String::from_utf8_lossy(file.data.as_ref()).into_owned())
}

/// Resolves a catalog image reference (`/ships/IMG_1.jpeg`) against the
/// asset directory.
#[must_use]
pub fn resolve_asset(asset_dir: &Path, reference: &str) -> PathBuf {
    asset_dir.join(reference.trim_start_matches('/'))
}
