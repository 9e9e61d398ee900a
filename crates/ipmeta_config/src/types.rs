//! Configuration types deserialized from `ipmeta.toml`.

use ipmeta_common::Vlnv;
use serde::Deserialize;

/// The whole project file.
#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    /// Project metadata.
    pub project: ProjectMeta,
    /// Meta-component assembly settings.
    #[serde(default)]
    pub generate: GenerateConfig,
    /// Import collaborators run before assembly.
    #[serde(default)]
    pub import: ImportConfig,
}

impl ProjectConfig {
    /// Returns the configured component identity, if it parses.
    ///
    /// The loader has already rejected malformed values, so `None` only means
    /// the field was left out.
    pub fn component_vlnv(&self) -> Option<Vlnv> {
        self.project.component.as_deref()?.parse().ok()
    }
}

/// `[project]`
#[derive(Debug, Deserialize)]
pub struct ProjectMeta {
    /// Project name.
    pub name: String,
    /// Project version.
    #[serde(default)]
    pub version: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// `vendor:library:name:version` of the component being prepared.
    #[serde(default)]
    pub component: Option<String>,
}

/// `[generate]`
#[derive(Debug, Default, Deserialize)]
pub struct GenerateConfig {
    /// Name of the active view. Without it no instantiation is looked up and
    /// the module name falls back to the component name.
    #[serde(default)]
    pub view: Option<String>,
}

/// `[import]`
#[derive(Debug, Default, Deserialize)]
pub struct ImportConfig {
    /// Quartus pin reports, relative to the project directory.
    #[serde(default)]
    pub pin_files: Vec<String>,
}
