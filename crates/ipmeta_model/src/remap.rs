//! Remap states: named conditions under which ports take given values.

use serde::{Deserialize, Serialize};

/// One port override of a remap state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemapPort {
    /// Name of the port this override applies to. It may no longer match
    /// any port of the component.
    pub port_name_ref: String,
    /// Raw expression the port must carry for the state to be active.
    pub value: String,
}

/// A named remap state with its port overrides, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemapState {
    /// State name.
    pub name: String,
    /// Overrides in declaration order.
    pub remap_ports: Vec<RemapPort>,
}

impl RemapState {
    /// Creates an empty remap state.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            remap_ports: Vec::new(),
        }
    }

    /// Appends an override.
    pub fn with_port(mut self, port_name: impl Into<String>, value: impl Into<String>) -> Self {
        self.remap_ports.push(RemapPort {
            port_name_ref: port_name.into(),
            value: value.into(),
        });
        self
    }
}
