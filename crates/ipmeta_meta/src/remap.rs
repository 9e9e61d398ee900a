//! Remap states with formatted override values.

use ipmeta_model::PortId;
use serde::{Deserialize, Serialize};

/// One formatted port override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedRemapPort {
    /// The overridden port, or `None` if the reference matches no port.
    pub port: Option<PortId>,
    /// The port name as written in the remap state.
    pub port_name: String,
    /// Formatted override value.
    pub value: String,
}

/// A remap state whose override values have been formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedRemapState {
    /// State name.
    pub name: String,
    /// Overrides in declaration order.
    pub ports: Vec<FormattedRemapPort>,
}

impl FormattedRemapState {
    /// Overrides whose port reference resolved.
    pub fn resolved_ports(&self) -> impl Iterator<Item = (PortId, &str)> {
        self.ports
            .iter()
            .filter_map(|p| p.port.map(|id| (id, p.value.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_ports_skip_dangling() {
        let state = FormattedRemapState {
            name: "sleep".to_string(),
            ports: vec![
                FormattedRemapPort {
                    port: Some(PortId::from_raw(0)),
                    port_name: "en".to_string(),
                    value: "0".to_string(),
                },
                FormattedRemapPort {
                    port: None,
                    port_name: "gone".to_string(),
                    value: "1".to_string(),
                },
            ],
        };
        let resolved: Vec<_> = state.resolved_ports().collect();
        assert_eq!(resolved, vec![(PortId::from_raw(0), "0")]);
    }
}
