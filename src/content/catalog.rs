// SPDX-License-Identifier: MPL-2.0
//! Scene catalog loading.
//!
//! The catalog file is TOML with a `[home]` table, a `[vita]` table and an
//! ordered `[[projects]]` array; each project may carry `[[projects.gallery]]`
//! entries. See `assets/content/scenes.toml` for the built-in catalog.

use super::embedded_text;
use crate::domain::scene::{GalleryImage, HomeInfo, ProjectInfo, SceneCatalog, VitaInfo};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const EMBEDDED_CATALOG: &str = "scenes.toml";
const CATALOG_WARNING: &str = "notification-catalog-load-error";

#[derive(Debug, Deserialize)]
struct CatalogFile {
    home: HomeEntry,
    #[serde(default)]
    projects: Vec<ProjectEntry>,
    vita: VitaEntry,
}

#[derive(Debug, Deserialize)]
struct HomeEntry {
    title: String,
    #[serde(default)]
    subtitle: String,
    #[serde(default)]
    background: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VitaEntry {
    #[serde(default)]
    subtitle: String,
    #[serde(default)]
    background: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProjectEntry {
    slug: String,
    title: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    eyebrow: String,
    #[serde(default)]
    long_description: String,
    #[serde(default)]
    gallery: Vec<GalleryEntry>,
}

#[derive(Debug, Deserialize)]
struct GalleryEntry {
    src: String,
    #[serde(default)]
    alt: String,
}

impl From<ProjectEntry> for ProjectInfo {
    fn from(entry: ProjectEntry) -> Self {
        ProjectInfo {
            slug: entry.slug.trim().to_string(),
            title: entry.title.trim().to_string(),
            image: entry.image.filter(|image| !image.trim().is_empty()),
            description: entry.description,
            eyebrow: entry.eyebrow,
            long_description: entry.long_description.trim().to_string(),
            gallery: entry
                .gallery
                .into_iter()
                .map(|image| GalleryImage {
                    src: image.src,
                    alt: image.alt,
                })
                .collect(),
        }
    }
}

/// Parses and validates catalog TOML.
pub fn parse_catalog(source: &str) -> Result<SceneCatalog> {
    let file: CatalogFile = toml::from_str(source).map_err(|err| Error::Catalog(err.to_string()))?;

    let home = HomeInfo {
        title: file.home.title,
        subtitle: file.home.subtitle,
        background: file.home.background,
    };
    let vita = VitaInfo {
        subtitle: file.vita.subtitle,
        background: file.vita.background,
    };
    let projects = file.projects.into_iter().map(ProjectInfo::from).collect();

    Ok(SceneCatalog::new(home, projects, vita)?)
}

/// Returns the catalog shipped with the application.
pub fn embedded_catalog() -> Result<SceneCatalog> {
    let source = embedded_text(EMBEDDED_CATALOG)
        .ok_or_else(|| Error::Catalog(format!("{} is not embedded", EMBEDDED_CATALOG)))?;
    parse_catalog(&source)
}

/// Loads a catalog file from disk.
pub fn load_catalog_from_path(path: &Path) -> Result<SceneCatalog> {
    let source = fs::read_to_string(path)?;
    parse_catalog(&source)
}

/// Loads the scene catalog, preferring `override_path` when given.
///
/// Returns the catalog and, when the override could not be used, the i18n
/// key of a warning. The built-in catalog is used in that case.
pub fn load_catalog(override_path: Option<&Path>) -> (SceneCatalog, Option<String>) {
    let mut warning = None;

    if let Some(path) = override_path {
        match load_catalog_from_path(path) {
            Ok(catalog) => {
                log::info!(
                    "Loaded {} scenes from {}",
                    catalog.len(),
                    path.display()
                );
                return (catalog, None);
            }
            Err(err) => {
                log::warn!("Falling back to built-in scenes ({}): {}", path.display(), err);
                warning = Some(CATALOG_WARNING.to_string());
            }
        }
    }

    match embedded_catalog() {
        Ok(catalog) => (catalog, warning),
        Err(err) => {
            log::error!("Built-in scene catalog is invalid: {}", err);
            (bare_catalog(), Some(CATALOG_WARNING.to_string()))
        }
    }
}

fn bare_catalog() -> SceneCatalog {
    SceneCatalog::with_fixed_scenes(
        HomeInfo {
            title: String::new(),
            subtitle: String::new(),
            background: None,
        },
        VitaInfo {
            subtitle: String::new(),
            background: None,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scene::SceneKind;
    use tempfile::tempdir;

    const MINIMAL: &str = r#"
        [home]
        title = "Name"

        [vita]

        [[projects]]
        slug = "a"
        title = "Alpha"

        [[projects.gallery]]
        src = "/a/1.jpg"
        alt = "first"

        [[projects]]
        slug = "b"
        title = "Beta"
    "#;

    #[test]
    fn builtin_catalog_has_five_projects() {
        let catalog = embedded_catalog().expect("built-in catalog parses");
        assert_eq!(catalog.len(), 7);
        assert_eq!(
            catalog.labels(),
            [
                "HOME",
                "DIGITAL ASSETS",
                "MORPHONIC LAB",
                "GLITCHING CARLOWITZ",
                "SHIPS",
                "SINKS",
                "VITA"
            ]
        );
        assert_eq!(catalog.project("sinks").map(|p| p.gallery.len()), Some(9));
        assert_eq!(
            catalog.project("new-ecologies").map(|p| p.eyebrow.as_str()),
            Some("MEDIA INSTALLATION")
        );
    }

    #[test]
    fn gallery_entries_attach_to_their_project() {
        let catalog = parse_catalog(MINIMAL).unwrap();
        assert_eq!(catalog.project("a").unwrap().gallery[0].alt, "first");
        assert!(catalog.project("b").unwrap().gallery.is_empty());
        assert!(matches!(catalog.get(3).unwrap().kind(), SceneKind::Vita(_)));
    }

    #[test]
    fn duplicate_slugs_are_rejected() {
        let source = MINIMAL.replace("slug = \"b\"", "slug = \"a\"");
        assert!(matches!(parse_catalog(&source), Err(Error::Catalog(_))));
    }

    #[test]
    fn malformed_toml_is_a_catalog_error() {
        assert!(matches!(parse_catalog("[home"), Err(Error::Catalog(_))));
    }

    #[test]
    fn valid_override_replaces_builtin() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scenes.toml");
        fs::write(&path, MINIMAL).unwrap();

        let (catalog, warning) = load_catalog(Some(&path));
        assert_eq!(catalog.len(), 4);
        assert!(warning.is_none());
    }

    #[test]
    fn invalid_override_falls_back_with_warning() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scenes.toml");
        fs::write(&path, MINIMAL.replace("title = \"Beta\"", "title = \"\"")).unwrap();

        let (catalog, warning) = load_catalog(Some(&path));
        assert_eq!(catalog.len(), 7);
        assert_eq!(warning.as_deref(), Some("notification-catalog-load-error"));
    }

    #[test]
    fn missing_override_falls_back_with_warning() {
        let dir = tempdir().unwrap();
        let (catalog, warning) = load_catalog(Some(&dir.path().join("absent.toml")));
        assert_eq!(catalog.len(), 7);
        assert_eq!(warning.as_deref(), Some(CATALOG_WARNING));
    }
}
