// SPDX-License-Identifier: MPL-2.0
//! Cached preview frame of the home scene.
//!
//! The first time the home media finishes loading, a downscaled JPEG of it is
//! stored in the data directory. On the next start that frame is shown as a
//! placeholder while the full media loads. There is exactly one entry; it is
//! overwritten whenever a new frame is captured.
//!
//! The entry is a CBOR record that remembers which image it was captured
//! from, so a changed home background never shows a stale preview.
//!
//! Everything here is best-effort: callers log failures and move on.

use super::{decode_image, SceneImage};
use crate::app::config::{PREVIEW_FILE, PREVIEW_JPEG_QUALITY, PREVIEW_MAX_SIDE};
use crate::app::paths;
use crate::error::{Error, Result};
use image_rs::codecs::jpeg::JpegEncoder;
use image_rs::{DynamicImage, RgbaImage};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Persisted preview entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
struct PreviewRecord {
    /// Image reference the frame was captured from.
    source: String,
    width: u32,
    height: u32,
    /// JPEG-encoded frame.
    jpeg: Vec<u8>,
}

/// Handle to the single preview entry in the data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewCache {
    path: Option<PathBuf>,
}

impl PreviewCache {
    /// Cache in the default data directory.
    #[must_use]
    pub fn new() -> Self {
        Self::with_override(None)
    }

    /// Cache in `base_dir` instead of the default data directory.
    #[must_use]
    pub fn with_override(base_dir: Option<PathBuf>) -> Self {
        let path = paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(PREVIEW_FILE);
            path
        });
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Reads the cached frame if it was captured from `source`.
    pub fn load(&self, source: &str) -> Result<Option<SceneImage>> {
        let Some(path) = self.path.as_deref() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }

        let reader = BufReader::new(fs::File::open(path)?);
        let record: PreviewRecord =
            ciborium::from_reader(reader).map_err(|e| Error::Io(e.to_string()))?;
        if record.source != source {
            log::debug!("Cached preview belongs to {}, ignoring", record.source);
            return Ok(None);
        }

        decode_image(&record.jpeg).map(Some)
    }

    /// Captures `image` as the preview for `source`, replacing any earlier entry.
    pub fn store(&self, source: &str, image: &SceneImage) -> Result<()> {
        let path = self
            .path
            .as_deref()
            .ok_or_else(|| Error::Io("no data directory for the preview cache".into()))?;

        let (width, height, jpeg) = encode_preview(image)?;
        let record = PreviewRecord {
            source: source.to_string(),
            width,
            height,
            jpeg,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let writer = BufWriter::new(fs::File::create(path)?);
        ciborium::into_writer(&record, writer).map_err(|e| Error::Io(e.to_string()))?;
        Ok(())
    }
}

impl Default for PreviewCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Downscales `image` so its longest side is at most the preview size and
/// encodes it as JPEG. Returns the encoded size and bytes.
fn encode_preview(image: &SceneImage) -> Result<(u32, u32, Vec<u8>)> {
    let rgba = RgbaImage::from_raw(image.width, image.height, image.rgba_bytes().to_vec())
        .ok_or_else(|| Error::Image("pixel buffer does not match image size".into()))?;
    let mut frame = DynamicImage::ImageRgba8(rgba);

    if image.width.max(image.height) > PREVIEW_MAX_SIDE {
        frame = frame.thumbnail(PREVIEW_MAX_SIDE, PREVIEW_MAX_SIDE);
    }

    let rgb = frame.to_rgb8();
    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, PREVIEW_JPEG_QUALITY).encode_image(&rgb)?;
    Ok((rgb.width(), rgb.height(), jpeg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn solid(width: u32, height: u32) -> SceneImage {
        SceneImage::from_rgba(width, height, vec![200; (width * height * 4) as usize])
    }

    #[test]
    fn missing_entry_loads_nothing() {
        let dir = tempdir().unwrap();
        let cache = PreviewCache::with_override(Some(dir.path().to_path_buf()));
        assert!(cache.load("/landing.jpg").unwrap().is_none());
    }

    #[test]
    fn stored_frame_is_reloaded_for_same_source() {
        let dir = tempdir().unwrap();
        let cache = PreviewCache::with_override(Some(dir.path().to_path_buf()));

        cache.store("/landing.jpg", &solid(32, 16)).unwrap();
        let loaded = cache.load("/landing.jpg").unwrap().expect("cached frame");

        assert_eq!((loaded.width, loaded.height), (32, 16));
        assert!(dir.path().join(PREVIEW_FILE).exists());
    }

    #[test]
    fn frame_from_other_source_is_ignored() {
        let dir = tempdir().unwrap();
        let cache = PreviewCache::with_override(Some(dir.path().to_path_buf()));

        cache.store("/old.jpg", &solid(8, 8)).unwrap();
        assert!(cache.load("/new.jpg").unwrap().is_none());
    }

    #[test]
    fn large_frames_are_downscaled() {
        let (width, height, _) = encode_preview(&solid(1280, 320)).unwrap();
        assert_eq!(width, PREVIEW_MAX_SIDE);
        assert_eq!(height, 160);
    }

    #[test]
    fn corrupt_entry_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(PREVIEW_FILE), b"\xff\x00garbage").unwrap();
        let cache = PreviewCache::with_override(Some(dir.path().to_path_buf()));
        assert!(cache.load("/landing.jpg").is_err());
    }

    #[test]
    fn second_store_overwrites_entry() {
        let dir = tempdir().unwrap();
        let cache = PreviewCache::with_override(Some(dir.path().to_path_buf()));

        cache.store("/landing.jpg", &solid(8, 8)).unwrap();
        cache.store("/landing.jpg", &solid(20, 10)).unwrap();

        let loaded = cache.load("/landing.jpg").unwrap().unwrap();
        assert_eq!((loaded.width, loaded.height), (20, 10));
    }
}
