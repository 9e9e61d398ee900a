//! Named parameters with raw expression values.

use serde::{Deserialize, Serialize};

/// Where a parameter is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterKind {
    /// Declared on the component itself.
    Parameter,
    /// Declared on a component instantiation and passed to the HDL module.
    ModuleParameter,
}

/// A parameter of a component or of one of its instantiations.
///
/// Other expressions refer to a parameter through its `value_id`, never its
/// `name`; the name is only what users read. `value` is raw expression text
/// and may itself contain value ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Display name.
    pub name: String,
    /// Stable identifier used inside expressions.
    pub value_id: String,
    /// Raw expression text.
    pub value: String,
    /// Declaration scope.
    pub kind: ParameterKind,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

impl Parameter {
    /// Creates a component-level parameter.
    pub fn new(
        name: impl Into<String>,
        value_id: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value_id: value_id.into(),
            value: value.into(),
            kind: ParameterKind::Parameter,
            description: String::new(),
        }
    }

    /// Creates a module parameter.
    pub fn module(
        name: impl Into<String>,
        value_id: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            kind: ParameterKind::ModuleParameter,
            ..Self::new(name, value_id, value)
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns `true` for module parameters.
    pub fn is_module_parameter(&self) -> bool {
        self.kind == ParameterKind::ModuleParameter
    }
}
