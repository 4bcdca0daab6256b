use serde::{Deserialize, Serialize};

#[cfg(feature = "ssr")]
use axum::extract::FromRef;
#[cfg(feature = "ssr")]
use leptos::config::LeptosOptions;

#[cfg(feature = "ssr")]
#[derive(FromRef, Debug, Clone)]
pub struct AppState {
    pub leptos_options: LeptosOptions,
    pub catalog_path: std::sync::Arc<std::path::PathBuf>,
}

/// The media variant of a portfolio project, tagged by the `type` field of
/// the catalog JSON. Entries without a `type` field are plain images.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
    Pdf,
    #[serde(rename = "3d")]
    Model3D,
}

/// One portfolio entry. Everything except `id`, `title` and `category` is
/// optional; absent fields degrade per-field when rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub category: String,
    #[serde(rename = "type", default)]
    pub media: MediaKind,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub pdf: Option<String>,
    #[serde(default)]
    pub model3d: Option<String>,
    #[serde(default)]
    pub preview: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub technologies: Option<Vec<String>>,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            id: 0,
            title: String::new(),
            category: String::new(),
            media: MediaKind::Image,
            image: None,
            video: None,
            poster: None,
            pdf: None,
            model3d: None,
            preview: None,
            description: None,
            technologies: None,
        }
    }
}

/// The shape of the catalog data file: an object with a `projects` array.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogFile {
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// Look up a project by its id. The catalog is small, so a linear scan is
/// fine; `id` is the sole lookup key for the detail view.
#[must_use]
pub fn find_project(projects: &[Project], id: u32) -> Option<&Project> {
    projects.iter().find(|project| project.id == id)
}
