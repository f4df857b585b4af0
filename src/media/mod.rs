// SPDX-License-Identifier: MPL-2.0
//! Scene and gallery image decoding.
//!
//! Raster formats are decoded with `image`; SVG artwork is rasterized with
//! `resvg`. Every image keeps its RGBA pixels next to the iced handle so a
//! preview frame can be captured from it later.

pub mod preview;

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use resvg::usvg;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// A decoded image ready to be drawn.
#[derive(Debug, Clone)]
pub struct SceneImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    rgba_bytes: Arc<Vec<u8>>,
}

impl SceneImage {
    /// Creates a new `SceneImage` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let rgba_bytes = Arc::new(pixels);
        let handle = image::Handle::from_rgba(width, height, rgba_bytes.to_vec());
        Self {
            handle,
            width,
            height,
            rgba_bytes,
        }
    }

    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Width over height, 1.0 for degenerate images.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// Decodes encoded image bytes (PNG, JPEG, WebP, ...).
pub fn decode_image(bytes: &[u8]) -> Result<SceneImage> {
    let img = image_rs::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();
    Ok(SceneImage::from_rgba(width, height, img.to_rgba8().into_vec()))
}

fn rasterize_svg(svg_data: &[u8]) -> Result<SceneImage> {
    let tree = usvg::Tree::from_data(svg_data, &usvg::Options::default())
        .map_err(|e| Error::Image(e.to_string()))?;

    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    if width == 0 || height == 0 {
        return Err(Error::Image("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Image("Failed to allocate SVG pixmap".into()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    Ok(SceneImage::from_rgba(width, height, pixmap.data().to_vec()))
}

/// Loads an image from disk.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read and [`Error::Image`]
/// when it cannot be decoded.
pub fn load_scene_image<P: AsRef<Path>>(path: P) -> Result<SceneImage> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;

    let is_svg = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    if is_svg {
        rasterize_svg(&bytes)
    } else {
        decode_image(&bytes)
    }
}
