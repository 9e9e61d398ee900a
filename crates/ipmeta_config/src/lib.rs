//! Parsing and validation of `ipmeta.toml` project files.
//!
//! A project file names the component being prepared for generation, the view
//! whose instantiation drives module naming, and the pin files to import
//! before the meta-component is assembled.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
