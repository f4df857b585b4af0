// SPDX-License-Identifier: MPL-2.0
//! Vita and legal notice text loading.

use super::{embedded_text, resolve_asset};
use crate::app::config::{LEGAL_FILE, VITA_FILE};
use crate::domain::vita::{parse_vita, Vita};
use crate::error::Result;
use std::fs;
use std::path::Path;

fn read_text(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Vita text bundled with the application.
#[must_use]
pub fn fallback_vita_text() -> String {
    embedded_text(VITA_FILE).unwrap_or_default()
}

/// Loads and parses `<asset_dir>/vita.txt`, falling back to the bundled vita
/// when the file is missing, unreadable or blank.
#[must_use]
pub fn load_vita(asset_dir: &Path) -> Vita {
    let path = resolve_asset(asset_dir, VITA_FILE);
    let text = match read_text(&path) {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            log::debug!("{} is blank, using bundled vita", path.display());
            fallback_vita_text()
        }
        Err(err) => {
            log::debug!("Using bundled vita: {}", err);
            fallback_vita_text()
        }
    };
    parse_vita(&text)
}

/// Loads `<asset_dir>/legal.txt` verbatim. `None` when it cannot be read.
#[must_use]
pub fn load_legal(asset_dir: &Path) -> Option<String> {
    let path = resolve_asset(asset_dir, LEGAL_FILE);
    match read_text(&path) {
        Ok(text) => Some(text),
        Err(err) => {
            log::warn!("Legal notice unavailable at {}: {}", path.display(), err);
            None
        }
    }
}
