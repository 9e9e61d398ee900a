//! The component aggregate and its views, instantiations, and file sets.

use crate::arena::Arena;
use crate::ids::PortId;
use crate::parameter::Parameter;
use crate::port::Port;
use crate::remap::RemapState;
use ipmeta_common::Vlnv;
use serde::{Deserialize, Serialize};

/// A view selects which component instantiation implements the component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    /// View name, e.g. `rtl`.
    pub name: String,
    /// Name of the instantiation this view refers to; may be empty or dangling.
    pub component_instantiation_ref: String,
}

impl View {
    /// Creates a view referring to an instantiation.
    pub fn new(name: impl Into<String>, instantiation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            component_instantiation_ref: instantiation.into(),
        }
    }
}

/// An HDL-level realisation of the component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentInstantiation {
    /// Instantiation name.
    pub name: String,
    /// HDL module name; may be empty.
    pub module_name: String,
    /// Parameters passed to the HDL module.
    pub module_parameters: Vec<Parameter>,
    /// Names of the file sets holding the module sources.
    pub file_set_refs: Vec<String>,
}

impl ComponentInstantiation {
    /// Creates an instantiation with no parameters or file sets.
    pub fn new(name: impl Into<String>, module_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            module_name: module_name.into(),
            module_parameters: Vec::new(),
            file_set_refs: Vec::new(),
        }
    }

    /// Appends a module parameter.
    pub fn with_module_parameter(mut self, parameter: Parameter) -> Self {
        self.module_parameters.push(parameter);
        self
    }

    /// Appends a file set reference.
    pub fn with_file_set_ref(mut self, name: impl Into<String>) -> Self {
        self.file_set_refs.push(name.into());
        self
    }
}

/// A named group of source files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSet {
    /// File set name.
    pub name: String,
    /// File paths.
    pub files: Vec<String>,
}

impl FileSet {
    /// Creates a file set.
    pub fn new(name: impl Into<String>, files: Vec<String>) -> Self {
        Self {
            name: name.into(),
            files,
        }
    }
}

/// A hardware component description.
///
/// Lookups by name return the first match in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Qualified identity.
    pub vlnv: Vlnv,
    /// Component-level parameters.
    pub parameters: Vec<Parameter>,
    /// Ports, addressed by [`PortId`].
    pub ports: Arena<PortId, Port>,
    /// Views.
    pub views: Vec<View>,
    /// Component instantiations.
    pub instantiations: Vec<ComponentInstantiation>,
    /// File sets.
    pub file_sets: Vec<FileSet>,
    /// Remap states.
    pub remap_states: Vec<RemapState>,
}

impl Component {
    /// Creates an empty component.
    pub fn new(vlnv: Vlnv) -> Self {
        Self {
            vlnv,
            ..Self::default()
        }
    }

    /// Appends a parameter.
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Appends a port.
    pub fn with_port(mut self, port: Port) -> Self {
        self.ports.alloc(port);
        self
    }

    /// Appends a view.
    pub fn with_view(mut self, view: View) -> Self {
        self.views.push(view);
        self
    }

    /// Appends an instantiation.
    pub fn with_instantiation(mut self, instantiation: ComponentInstantiation) -> Self {
        self.instantiations.push(instantiation);
        self
    }

    /// Appends a file set.
    pub fn with_file_set(mut self, file_set: FileSet) -> Self {
        self.file_sets.push(file_set);
        self
    }

    /// Appends a remap state.
    pub fn with_remap_state(mut self, state: RemapState) -> Self {
        self.remap_states.push(state);
        self
    }

    /// Appends a port and returns its id.
    pub fn add_port(&mut self, port: Port) -> PortId {
        self.ports.alloc(port)
    }

    /// Finds a port by name.
    pub fn port_by_name(&self, name: &str) -> Option<PortId> {
        self.ports.find(|port| port.name == name)
    }

    /// Returns the port with the given id.
    pub fn port(&self, id: PortId) -> Option<&Port> {
        self.ports.get(id)
    }

    /// Mutable variant of [`port`](Self::port).
    pub fn port_mut(&mut self, id: PortId) -> Option<&mut Port> {
        self.ports.get_mut(id)
    }

    /// Finds a file set by name.
    pub fn file_set(&self, name: &str) -> Option<&FileSet> {
        self.file_sets.iter().find(|f| f.name == name)
    }

    /// Finds an instantiation by name.
    pub fn instantiation(&self, name: &str) -> Option<&ComponentInstantiation> {
        self.instantiations.iter().find(|i| i.name == name)
    }

    /// Finds a view by name.
    pub fn view(&self, name: &str) -> Option<&View> {
        self.views.iter().find(|v| v.name == name)
    }
}
