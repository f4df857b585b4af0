// SPDX-License-Identifier: MPL-2.0
//! Validated, ordered scene list.

use super::{HomeInfo, ProjectInfo, Scene, VitaInfo};
use std::collections::HashSet;
use std::fmt;

/// Reasons a catalog is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A project has an empty or whitespace-only slug.
    EmptyId,
    /// Two scenes share the same identifier.
    DuplicateId(String),
    /// A project has an empty title.
    EmptyTitle(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::EmptyId => write!(f, "scene with empty identifier"),
            CatalogError::DuplicateId(id) => write!(f, "duplicate scene identifier '{}'", id),
            CatalogError::EmptyTitle(id) => write!(f, "scene '{}' has an empty title", id),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Fixed ordered list of scenes: home, projects in order, vita.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneCatalog {
    scenes: Vec<Scene>,
}

impl SceneCatalog {
    /// Builds a catalog, rejecting empty or duplicate identifiers and
    /// projects without a title.
    pub fn new(
        home: HomeInfo,
        projects: Vec<ProjectInfo>,
        vita: VitaInfo,
    ) -> Result<Self, CatalogError> {
        let mut seen: HashSet<&str> = HashSet::from([super::HOME_ID, super::VITA_ID]);
        for project in &projects {
            let slug = project.slug.trim();
            if slug.is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if !seen.insert(slug) {
                return Err(CatalogError::DuplicateId(slug.to_string()));
            }
            if project.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(slug.to_string()));
            }
        }

        let mut scenes = Vec::with_capacity(projects.len() + 2);
        scenes.push(Scene::home(home));
        scenes.extend(projects.into_iter().map(Scene::project));
        scenes.push(Scene::vita(vita));
        Ok(Self { scenes })
    }

    /// Catalog with only the home and vita scenes. Never fails.
    #[must_use]
    pub fn with_fixed_scenes(home: HomeInfo, vita: VitaInfo) -> Self {
        Self {
            scenes: vec![Scene::home(home), Scene::vita(vita)],
        }
    }

    /// Number of scenes; always at least two (home and vita).
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// A catalog always holds home and vita.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Scene> {
        self.scenes.get(index)
    }

    #[must_use]
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.iter()
    }

    /// Projects in reel order.
    pub fn projects(&self) -> impl Iterator<Item = &ProjectInfo> {
        self.scenes.iter().filter_map(Scene::as_project)
    }

    #[must_use]
    pub fn project(&self, slug: &str) -> Option<&ProjectInfo> {
        self.projects().find(|project| project.slug == slug)
    }

    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.scenes.iter().position(|scene| scene.id() == id)
    }

    /// Upper-cased dot labels in reel order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.scenes.iter().map(Scene::label).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scene::{GalleryImage, SceneKind};

    fn home() -> HomeInfo {
        HomeInfo {
            title: "Name".into(),
            subtitle: "Tagline".into(),
            background: None,
        }
    }

    fn vita() -> VitaInfo {
        VitaInfo {
            subtitle: "Name".into(),
            background: Some("/name-collage.jpg".into()),
        }
    }

    fn project(slug: &str, title: &str) -> ProjectInfo {
        ProjectInfo {
            slug: slug.into(),
            title: title.into(),
            image: Some(format!("/{slug}/cover.jpg")),
            description: String::new(),
            eyebrow: String::new(),
            long_description: String::new(),
            gallery: vec![GalleryImage {
                src: format!("/{slug}/1.jpg"),
                alt: "one".into(),
            }],
        }
    }

    #[test]
    fn scenes_are_ordered_home_projects_vita() {
        let catalog = SceneCatalog::new(
            home(),
            vec![project("ships", "Ships"), project("sinks", "Sinks")],
            vita(),
        )
        .unwrap();

        assert_eq!(catalog.len(), 4);
        let ids: Vec<_> = catalog.iter().map(Scene::id).collect();
        assert_eq!(ids, ["home", "ships", "sinks", "vita"]);
        assert!(matches!(catalog.get(0).unwrap().kind(), SceneKind::Home(_)));
        assert_eq!(catalog.index_of("sinks"), Some(2));
    }

    #[test]
    fn labels_are_upper_cased() {
        let catalog =
            SceneCatalog::new(home(), vec![project("lab", "Morphonic Lab")], vita()).unwrap();
        assert_eq!(catalog.labels(), ["HOME", "MORPHONIC LAB", "VITA"]);
    }

    #[test]
    fn empty_catalog_still_has_home_and_vita() {
        let catalog = SceneCatalog::new(home(), Vec::new(), vita()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
        assert_eq!(catalog, SceneCatalog::with_fixed_scenes(home(), vita()));
    }

    #[test]
    fn rejects_duplicate_slugs() {
        let err = SceneCatalog::new(
            home(),
            vec![project("ships", "Ships"), project("ships", "Other")],
            vita(),
        )
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId("ships".into()));
    }

    #[test]
    fn rejects_reserved_slugs() {
        let err = SceneCatalog::new(home(), vec![project("vita", "Vita")], vita()).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId("vita".into()));
    }

    #[test]
    fn rejects_empty_slug_and_title() {
        assert_eq!(
            SceneCatalog::new(home(), vec![project("  ", "Blank")], vita()).unwrap_err(),
            CatalogError::EmptyId
        );
        assert_eq!(
            SceneCatalog::new(home(), vec![project("x", " ")], vita()).unwrap_err(),
            CatalogError::EmptyTitle("x".into())
        );
    }

    #[test]
    fn scene_image_follows_kind() {
        let catalog = SceneCatalog::new(home(), vec![project("ships", "Ships")], vita()).unwrap();
        assert_eq!(catalog.get(0).unwrap().image(), None);
        assert_eq!(catalog.get(1).unwrap().image(), Some("/ships/cover.jpg"));
        assert_eq!(catalog.get(2).unwrap().image(), Some("/name-collage.jpg"));
        assert_eq!(catalog.project("ships").unwrap().gallery.len(), 1);
    }
}
