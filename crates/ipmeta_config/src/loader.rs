//! Loading and validating project files.

use crate::error::ConfigError;
use crate::types::ProjectConfig;
use ipmeta_common::Vlnv;
use std::path::Path;

/// File name looked up inside a project directory.
pub const CONFIG_FILE_NAME: &str = "ipmeta.toml";

/// Loads `<project_dir>/ipmeta.toml`.
pub fn load_config(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    let content = std::fs::read_to_string(project_dir.join(CONFIG_FILE_NAME))?;
    load_config_from_str(&content)
}

/// Parses and validates project file text.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.project.name.trim().is_empty() {
        return Err(ConfigError::MissingField("project.name".to_string()));
    }
    if let Some(component) = &config.project.component {
        component
            .parse::<Vlnv>()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
    }
    if matches!(&config.generate.view, Some(view) if view.trim().is_empty()) {
        return Err(ConfigError::ValidationError(
            "generate.view must not be empty".to_string(),
        ));
    }
    if config.import.pin_files.iter().any(|p| p.trim().is_empty()) {
        return Err(ConfigError::ValidationError(
            "import.pin_files contains an empty path".to_string(),
        ));
    }
    Ok(())
}
