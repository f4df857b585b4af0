// SPDX-License-Identifier: MPL-2.0
//! Lazily mounted scene media.
//!
//! A scene's image is only requested once the reel has visited it. Requests
//! are issued at most once per scene for the lifetime of the application, so
//! remounting the reel never reloads what is already on hand. A failed load
//! is not retried; the scene keeps its gradient.
//!
//! The first successful home-media load also yields a [`PreviewCapture`],
//! unless a preview frame already exists.

use crate::content::resolve_asset;
use crate::domain::scene::{SceneCatalog, SceneKind};
use crate::error::{Error, Result};
use crate::media::preview::PreviewCache;
use crate::media::SceneImage;
use std::path::{Path, PathBuf};

/// Pending write of the home preview frame.
#[derive(Debug, Clone)]
pub struct PreviewCapture {
    cache: PreviewCache,
    source: String,
    image: SceneImage,
}

impl PreviewCapture {
    /// Encodes and stores the frame. Blocking; run it off the UI thread.
    pub fn run(self) -> Result<()> {
        self.cache.store(&self.source, &self.image)
    }
}

#[derive(Debug)]
pub struct SceneMedia {
    images: Vec<Option<SceneImage>>,
    requested: Vec<bool>,
    home_preview: Option<SceneImage>,
    preview_cache: PreviewCache,
    /// Set once a preview exists, cached or captured.
    preview_captured: bool,
}

impl SceneMedia {
    #[must_use]
    pub fn new(scene_count: usize, preview_cache: PreviewCache) -> Self {
        Self {
            images: vec![None; scene_count],
            requested: vec![false; scene_count],
            home_preview: None,
            preview_cache,
            preview_captured: false,
        }
    }

    /// Reads the cached preview of the home background, if it matches the
    /// catalog's current reference. Failures only leave the placeholder unset.
    pub fn restore_preview(&mut self, catalog: &SceneCatalog) {
        let Some(source) = home_source(catalog) else {
            return;
        };

        match self.preview_cache.load(source) {
            Ok(Some(preview)) => {
                log::debug!("Restored home preview {}x{}", preview.width, preview.height);
                self.home_preview = Some(preview);
                self.preview_captured = true;
            }
            Ok(None) => {}
            Err(err) => log::debug!("Ignoring cached home preview: {}", err),
        }
    }

    /// Decoded media, indexed like the catalog.
    #[must_use]
    pub fn images(&self) -> &[Option<SceneImage>] {
        &self.images
    }

    #[must_use]
    pub fn home_preview(&self) -> Option<&SceneImage> {
        self.home_preview.as_ref()
    }

    /// Marks `indices` as requested and returns the files still to be loaded.
    /// Scenes without an image, unknown indices and scenes already requested
    /// are skipped.
    pub fn claim(
        &mut self,
        indices: &[usize],
        catalog: &SceneCatalog,
        asset_dir: &Path,
    ) -> Vec<(usize, PathBuf)> {
        let mut claimed = Vec::new();
        for &index in indices {
            let Some(reference) = catalog.get(index).and_then(|scene| scene.image()) else {
                continue;
            };
            match self.requested.get_mut(index) {
                Some(requested) if !*requested => {
                    *requested = true;
                    claimed.push((index, resolve_asset(asset_dir, reference)));
                }
                _ => {}
            }
        }
        claimed
    }

    /// Stores the outcome of a load. Returns a capture job when this was the
    /// first home image and no preview exists yet.
    pub fn finish(
        &mut self,
        index: usize,
        result: std::result::Result<SceneImage, Error>,
        catalog: &SceneCatalog,
    ) -> Option<PreviewCapture> {
        let image = match result {
            Ok(image) => image,
            Err(err) => {
                log::warn!("Scene {} media failed to load: {}", index, err);
                return None;
            }
        };

        let slot = self.images.get_mut(index)?;
        *slot = Some(image.clone());

        let scene = catalog.get(index)?;
        if !matches!(scene.kind(), SceneKind::Home(_)) || self.preview_captured {
            return None;
        }
        let source = scene.image()?.to_string();
        self.preview_captured = true;

        Some(PreviewCapture {
            cache: self.preview_cache.clone(),
            source,
            image,
        })
    }
}

fn home_source(catalog: &SceneCatalog) -> Option<&str> {
    catalog
        .iter()
        .find(|scene| matches!(scene.kind(), SceneKind::Home(_)))
        .and_then(|scene| scene.image())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scene::{HomeInfo, VitaInfo};
    use tempfile::tempdir;

    fn catalog(home_image: Option<&str>) -> SceneCatalog {
        SceneCatalog::with_fixed_scenes(
            HomeInfo {
                title: "Christian Seemann".into(),
                subtitle: String::new(),
                background: home_image.map(str::to_string),
            },
            VitaInfo {
                subtitle: String::new(),
                background: Some("/vita.jpg".into()),
            },
        )
    }

    fn pixel() -> SceneImage {
        SceneImage::from_rgba(1, 1, vec![255; 4])
    }

    fn media(dir: &Path, scenes: usize) -> SceneMedia {
        SceneMedia::new(scenes, PreviewCache::with_override(Some(dir.to_path_buf())))
    }

    #[test]
    fn each_scene_is_claimed_once() {
        let dir = tempdir().unwrap();
        let catalog = catalog(Some("/home.jpg"));
        let mut media = media(dir.path(), catalog.len());
        let assets = Path::new("/srv/assets");

        let first = media.claim(&[0, 1], &catalog, assets);
        assert_eq!(
            first,
            vec![
                (0, PathBuf::from("/srv/assets/home.jpg")),
                (1, PathBuf::from("/srv/assets/vita.jpg")),
            ]
        );
        assert!(media.claim(&[0, 1], &catalog, assets).is_empty());
    }

    #[test]
    fn scenes_without_image_or_out_of_range_are_skipped() {
        let dir = tempdir().unwrap();
        let catalog = catalog(None);
        let mut media = media(dir.path(), catalog.len());

        assert!(media.claim(&[0, 7], &catalog, dir.path()).is_empty());
    }

    #[test]
    fn first_home_load_requests_one_capture() {
        let dir = tempdir().unwrap();
        let catalog = catalog(Some("/home.jpg"));
        let mut media = media(dir.path(), catalog.len());

        let capture = media.finish(0, Ok(pixel()), &catalog);
        assert!(capture.is_some());
        assert!(media.images()[0].is_some());
        assert!(media.finish(0, Ok(pixel()), &catalog).is_none());

        capture.unwrap().run().unwrap();
        let mut restored = SceneMedia::new(catalog.len(), PreviewCache::with_override(Some(dir.path().to_path_buf())));
        restored.restore_preview(&catalog);
        assert!(restored.home_preview().is_some());
        assert!(restored.finish(0, Ok(pixel()), &catalog).is_none());
    }

    #[test]
    fn other_scenes_never_capture() {
        let dir = tempdir().unwrap();
        let catalog = catalog(Some("/home.jpg"));
        let mut media = media(dir.path(), catalog.len());

        assert!(media.finish(1, Ok(pixel()), &catalog).is_none());
        assert!(media.images()[1].is_some());
    }

    #[test]
    fn failed_load_leaves_slot_empty() {
        let dir = tempdir().unwrap();
        let catalog = catalog(Some("/home.jpg"));
        let mut media = media(dir.path(), catalog.len());

        let capture = media.finish(0, Err(Error::Image("truncated".into())), &catalog);
        assert!(capture.is_none());
        assert!(media.images()[0].is_none());
    }

    #[test]
    fn preview_for_other_background_is_not_restored() {
        let dir = tempdir().unwrap();
        PreviewCache::with_override(Some(dir.path().to_path_buf()))
            .store("/old-home.jpg", &pixel())
            .unwrap();

        let catalog = catalog(Some("/home.jpg"));
        let mut media = media(dir.path(), catalog.len());
        media.restore_preview(&catalog);

        assert!(media.home_preview().is_none());
    }
}
