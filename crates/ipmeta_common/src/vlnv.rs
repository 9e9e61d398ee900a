//! Vendor-library-name-version identities of IP components.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The qualified identity of a component: `vendor:library:name:version`.
///
/// The `name` part doubles as the default HDL module name when a component
/// has no active instantiation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vlnv {
    /// Vendor, usually a reversed domain such as `tut.fi`.
    pub vendor: String,
    /// Library the component belongs to.
    pub library: String,
    /// Component name.
    pub name: String,
    /// Component version.
    pub version: String,
}

impl Vlnv {
    /// Creates a VLNV from its four parts.
    pub fn new(
        vendor: impl Into<String>,
        library: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            vendor: vendor.into(),
            library: library.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// Returns the component name part.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Vlnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.vendor, self.library, self.name, self.version
        )
    }
}

/// Error returned when a string is not a `vendor:library:name:version` tuple.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid VLNV '{input}': expected vendor:library:name:version")]
pub struct ParseVlnvError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Vlnv {
    type Err = ParseVlnvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        match parts.as_slice() {
            [vendor, library, name, version] if !name.is_empty() => {
                Ok(Vlnv::new(*vendor, *library, *name, *version))
            }
            _ => Err(ParseVlnvError {
                input: s.to_string(),
            }),
        }
    }
}
