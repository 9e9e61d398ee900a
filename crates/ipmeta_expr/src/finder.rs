//! Lookup of parameters by value id.

use ipmeta_model::{Component, Parameter};

/// Resolves parameter value ids to display names and raw values.
pub trait ParameterFinder {
    /// Returns the display name of the parameter with `id`.
    fn name_for_id(&self, id: &str) -> Option<&str>;

    /// Returns the raw value expression of the parameter with `id`.
    fn value_for_id(&self, id: &str) -> Option<&str>;

    /// Returns `true` if some parameter carries `id`.
    fn has_id(&self, id: &str) -> bool {
        self.name_for_id(id).is_some()
    }
}

fn find_in<'p>(parameters: &'p [Parameter], id: &str) -> Option<&'p Parameter> {
    if id.is_empty() {
        return None;
    }
    parameters.iter().find(|p| p.value_id == id)
}

/// Finds parameters declared on a component.
#[derive(Debug, Clone, Copy)]
pub struct ComponentParameterFinder<'a> {
    component: &'a Component,
}

impl<'a> ComponentParameterFinder<'a> {
    /// Creates a finder over the component's own parameters.
    pub fn new(component: &'a Component) -> Self {
        Self { component }
    }
}

impl ParameterFinder for ComponentParameterFinder<'_> {
    fn name_for_id(&self, id: &str) -> Option<&str> {
        find_in(&self.component.parameters, id).map(|p| p.name.as_str())
    }

    fn value_for_id(&self, id: &str) -> Option<&str> {
        find_in(&self.component.parameters, id).map(|p| p.value.as_str())
    }
}

/// Finds parameters in an explicit list, such as module parameters.
#[derive(Debug, Clone, Copy)]
pub struct ListParameterFinder<'a> {
    parameters: &'a [Parameter],
}

impl<'a> ListParameterFinder<'a> {
    /// Creates a finder over `parameters`.
    pub fn new(parameters: &'a [Parameter]) -> Self {
        Self { parameters }
    }
}

impl ParameterFinder for ListParameterFinder<'_> {
    fn name_for_id(&self, id: &str) -> Option<&str> {
        find_in(self.parameters, id).map(|p| p.name.as_str())
    }

    fn value_for_id(&self, id: &str) -> Option<&str> {
        find_in(self.parameters, id).map(|p| p.value.as_str())
    }
}

/// Chains finders; the first finder that knows an id answers for it.
#[derive(Default)]
pub struct MultipleParameterFinder<'a> {
    finders: Vec<Box<dyn ParameterFinder + 'a>>,
}

impl<'a> MultipleParameterFinder<'a> {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            finders: Vec::new(),
        }
    }

    /// Appends a finder with lower precedence than those already added.
    pub fn add_finder(&mut self, finder: Box<dyn ParameterFinder + 'a>) {
        self.finders.push(finder);
    }

    /// Number of chained finders.
    pub fn len(&self) -> usize {
        self.finders.len()
    }

    /// Returns `true` if no finder has been added.
    pub fn is_empty(&self) -> bool {
        self.finders.is_empty()
    }
}

impl ParameterFinder for MultipleParameterFinder<'_> {
    fn name_for_id(&self, id: &str) -> Option<&str> {
        self.finders.iter().find_map(|f| f.name_for_id(id))
    }

    fn value_for_id(&self, id: &str) -> Option<&str> {
        self.finders.iter().find_map(|f| f.value_for_id(id))
    }
}
