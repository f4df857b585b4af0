// SPDX-License-Identifier: MPL-2.0
//! Scene domain types.
//!
//! A [`SceneCatalog`] is the fixed, ordered list of scenes shown by the reel:
//! the home intro, one scene per project, and the vita. It is built once at
//! startup and never changes afterwards, so its length is the navigator's
//! scene count for the whole process lifetime.

mod catalog;

pub use catalog::{CatalogError, SceneCatalog};

/// Identifier of the home scene.
pub const HOME_ID: &str = "home";
/// Identifier of the vita scene.
pub const VITA_ID: &str = "vita";

/// One image of a project gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    /// Asset-relative image path.
    pub src: String,
    /// Alternative text shown in the lightbox caption.
    pub alt: String,
}

/// Payload of a project scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    /// Stable identifier, also used as the scene id.
    pub slug: String,
    pub title: String,
    /// Hero image shown behind the reel scene.
    pub image: Option<String>,
    /// One-line teaser shown on the reel.
    pub description: String,
    /// Small caps line above the gallery title.
    pub eyebrow: String,
    pub long_description: String,
    pub gallery: Vec<GalleryImage>,
}

/// Payload of the home scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeInfo {
    pub title: String,
    pub subtitle: String,
    pub background: Option<String>,
}

/// Payload of the vita scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VitaInfo {
    /// Line shown under the `VITA` heading.
    pub subtitle: String,
    pub background: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneKind {
    Home(HomeInfo),
    Project(ProjectInfo),
    Vita(VitaInfo),
}

/// Entry of the scene catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    id: String,
    kind: SceneKind,
}

impl Scene {
    #[must_use]
    pub fn home(info: HomeInfo) -> Self {
        Self {
            id: HOME_ID.to_string(),
            kind: SceneKind::Home(info),
        }
    }

    #[must_use]
    pub fn project(info: ProjectInfo) -> Self {
        Self {
            id: info.slug.clone(),
            kind: SceneKind::Project(info),
        }
    }

    #[must_use]
    pub fn vita(info: VitaInfo) -> Self {
        Self {
            id: VITA_ID.to_string(),
            kind: SceneKind::Vita(info),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> &SceneKind {
        &self.kind
    }

    #[must_use]
    pub fn as_project(&self) -> Option<&ProjectInfo> {
        match &self.kind {
            SceneKind::Project(info) => Some(info),
            _ => None,
        }
    }

    /// Asset-relative path of the image shown behind this scene, if any.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        match &self.kind {
            SceneKind::Home(info) => info.background.as_deref(),
            SceneKind::Project(info) => info.image.as_deref(),
            SceneKind::Vita(info) => info.background.as_deref(),
        }
    }

    /// Label shown next to this scene's navigation dot.
    #[must_use]
    pub fn label(&self) -> String {
        match &self.kind {
            SceneKind::Home(_) => "HOME".to_string(),
            SceneKind::Project(info) => info.title.to_uppercase(),
            SceneKind::Vita(_) => "VITA".to_string(),
        }
    }
}
