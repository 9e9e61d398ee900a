//! Formatted projection of a component port.

use ipmeta_model::PortId;
use serde::{Deserialize, Serialize};

/// A port with its bound and width expressions formatted for display.
///
/// Vector bounds are always formatted. Array bounds are only filled for
/// wire ports and the width only for transactional ports; otherwise they
/// stay empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaPort {
    /// The source port.
    pub port: PortId,
    /// The port has a wire facet.
    pub is_wire: bool,
    /// The port has a transactional facet.
    pub is_transactional: bool,
    /// Formatted left vector bound.
    pub vector_left: String,
    /// Formatted right vector bound.
    pub vector_right: String,
    /// Formatted left array bound.
    pub array_left: String,
    /// Formatted right array bound.
    pub array_right: String,
    /// Formatted bus width.
    pub width: String,
}

impl MetaPort {
    /// Creates a projection with no facet and empty texts.
    pub fn new(port: PortId) -> Self {
        Self {
            port,
            is_wire: false,
            is_transactional: false,
            vector_left: String::new(),
            vector_right: String::new(),
            array_left: String::new(),
            array_right: String::new(),
            width: String::new(),
        }
    }
}
