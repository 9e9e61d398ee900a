//! Errors produced while loading `ipmeta.toml`.

/// Failure to load or validate a project file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML did not parse into the expected structure.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// A required field is empty.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A field has an unusable value.
    #[error("validation error: {0}")]
    ValidationError(String),
}
