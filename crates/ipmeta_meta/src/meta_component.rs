//! The meta-component: a component prepared for HDL generation.
//!
//! A [`MetaComponent`] pairs a component with its active view. Construction
//! resolves the module name and file sets of the view's instantiation and
//! copies the parameters. [`MetaComponent::format_component`] then derives
//! the display form of parameters, ports and remap states and merges the
//! module parameters into the meta-parameter list. The source component is
//! never modified.

use crate::errors::{
    warning_dangling_file_set, warning_invalid_parameter, warning_missing_instantiation,
    warning_unknown_remap_port,
};
use crate::meta_port::MetaPort;
use crate::remap::{FormattedRemapPort, FormattedRemapState};
use crate::sort::sort_parameters;
use ipmeta_common::{ContentHash, InternalError, MetaResult};
use ipmeta_diagnostics::DiagnosticSink;
use ipmeta_expr::{
    ComponentParameterFinder, ExpressionFormatter, ExpressionParser, ListParameterFinder,
    MultipleParameterFinder,
};
use ipmeta_model::{Component, ComponentInstantiation, FileSet, Parameter, ParameterKind, View};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A parameter evaluated for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedParameter {
    /// Parameter name.
    pub name: String,
    /// Value id of the parameter.
    pub value_id: String,
    /// Declaration scope.
    pub kind: ParameterKind,
    /// Evaluated text, or `n/a` when the value does not evaluate.
    pub text: String,
    /// Whether the value evaluated.
    pub is_valid: bool,
}

/// Owned, serializable copy of everything a [`MetaComponent`] derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaSnapshot {
    /// HDL module name.
    pub module_name: String,
    /// Formatted component parameters.
    pub parameters: Vec<Parameter>,
    /// Formatted module parameters.
    pub module_parameters: Vec<Parameter>,
    /// Merged meta-parameters.
    pub meta_parameters: Vec<Parameter>,
    /// Formatted ports by name.
    pub ports: BTreeMap<String, MetaPort>,
    /// Names of the referenced file sets.
    pub file_sets: Vec<String>,
    /// Formatted remap states.
    pub remap_states: Vec<FormattedRemapState>,
}

/// A component prepared for generation under one active view.
#[derive(Debug, Clone)]
pub struct MetaComponent<'a> {
    component: &'a Component,
    instantiation: Option<&'a ComponentInstantiation>,
    module_name: String,
    file_sets: Vec<&'a FileSet>,
    parameters: Vec<Parameter>,
    module_parameters: Vec<Parameter>,
    meta_parameters: Vec<Parameter>,
    ports: BTreeMap<String, MetaPort>,
    remap_states: Vec<FormattedRemapState>,
}

impl<'a> MetaComponent<'a> {
    /// Prepares `component` under `active_view`.
    ///
    /// With a view whose instantiation exists, the module name and file sets
    /// come from that instantiation; dangling file set references are
    /// dropped. The module name falls back to the component's VLNV name.
    pub fn new(
        component: &'a Component,
        active_view: Option<&View>,
        sink: &DiagnosticSink,
    ) -> Self {
        let mut instantiation = None;
        let mut module_name = String::new();
        let mut file_sets = Vec::new();

        if let Some(view) = active_view {
            let reference = view.component_instantiation_ref.as_str();
            match component.instantiation(reference) {
                Some(found) => {
                    module_name = found.module_name.clone();
                    for name in &found.file_set_refs {
                        match component.file_set(name) {
                            Some(file_set) => file_sets.push(file_set),
                            None => sink.emit(warning_dangling_file_set(&found.name, name)),
                        }
                    }
                    instantiation = Some(found);
                }
                None if !reference.is_empty() => {
                    sink.emit(warning_missing_instantiation(&view.name, reference));
                }
                None => {}
            }
        }

        if module_name.is_empty() {
            module_name = component.vlnv.name().to_string();
        }

        let mut meta = Self {
            component,
            instantiation,
            module_name,
            file_sets,
            parameters: Vec::new(),
            module_parameters: Vec::new(),
            meta_parameters: Vec::new(),
            ports: BTreeMap::new(),
            remap_states: Vec::new(),
        };
        meta.parse_parameters();
        meta
    }

    /// The source component.
    pub fn component(&self) -> &'a Component {
        self.component
    }

    /// The active instantiation, if the view named an existing one.
    pub fn instantiation(&self) -> Option<&'a ComponentInstantiation> {
        self.instantiation
    }

    /// HDL module name.
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// File sets of the active instantiation.
    pub fn file_sets(&self) -> &[&'a FileSet] {
        &self.file_sets
    }

    /// Component parameters; formatted and sorted after
    /// [`format_component`](Self::format_component).
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Module parameters; formatted and sorted after
    /// [`format_component`](Self::format_component).
    pub fn module_parameters(&self) -> &[Parameter] {
        &self.module_parameters
    }

    /// Merged parameter list used for generation.
    pub fn meta_parameters(&self) -> &[Parameter] {
        &self.meta_parameters
    }

    /// Formatted ports by name.
    pub fn ports(&self) -> &BTreeMap<String, MetaPort> {
        &self.ports
    }

    /// Formatted remap states.
    pub fn remap_states(&self) -> &[FormattedRemapState] {
        &self.remap_states
    }

    /// Resolver over component parameters, then module parameters.
    pub fn parameter_finder(&self) -> MultipleParameterFinder<'a> {
        let mut finder = MultipleParameterFinder::new();
        finder.add_finder(Box::new(ComponentParameterFinder::new(self.component)));
        if let Some(instantiation) = self.instantiation {
            finder.add_finder(Box::new(ListParameterFinder::new(
                &instantiation.module_parameters,
            )));
        }
        finder
    }

    fn parse_parameters(&mut self) {
        self.parameters = self.component.parameters.clone();
        self.module_parameters = self
            .instantiation
            .map(|i| i.module_parameters.clone())
            .unwrap_or_default();
    }

    /// Rebuilds every derived list from the source component.
    ///
    /// Parameters are re-copied, sorted so producers precede consumers, and
    /// their values rewritten with display names. Ports and remap states
    /// are formatted the same way, and module parameters are merged into
    /// the meta-parameters. Repeated calls give identical results.
    pub fn format_component(&mut self, sink: &DiagnosticSink) {
        let finder = self.parameter_finder();
        let formatter = ExpressionFormatter::new(&finder);

        self.parameters.clear();
        self.module_parameters.clear();
        self.meta_parameters.clear();

        self.parse_parameters();
        self.format_parameters(&formatter);
        self.format_ports(&formatter);
        self.parse_remap_states(&formatter, sink);
        self.parse_meta_parameters();

        tracing::debug!(
            module = %self.module_name,
            parameters = self.parameters.len(),
            module_parameters = self.module_parameters.len(),
            meta_parameters = self.meta_parameters.len(),
            ports = self.ports.len(),
            remap_states = self.remap_states.len(),
            "formatted component"
        );
    }

    fn format_parameters(&mut self, formatter: &ExpressionFormatter<'_>) {
        for group in [&mut self.parameters, &mut self.module_parameters] {
            sort_parameters(group);
            for parameter in group.iter_mut() {
                parameter.value = formatter.format_referring_expression(&parameter.value);
            }
        }
    }

    fn format_ports(&mut self, formatter: &ExpressionFormatter<'_>) {
        self.ports.clear();
        for (id, port) in self.component.ports.iter() {
            let mut meta = MetaPort::new(id);
            meta.vector_left = formatter.format_referring_expression(port.left_bound());
            meta.vector_right = formatter.format_referring_expression(port.right_bound());

            if port.wire.is_some() {
                meta.is_wire = true;
                meta.array_left = formatter.format_referring_expression(port.array_left());
                meta.array_right = formatter.format_referring_expression(port.array_right());
            } else if let Some(transactional) = &port.transactional {
                meta.is_transactional = true;
                meta.width = formatter.format_referring_expression(&transactional.bus_width);
            }

            self.ports.insert(port.name.clone(), meta);
        }
    }

    fn parse_remap_states(&mut self, formatter: &ExpressionFormatter<'_>, sink: &DiagnosticSink) {
        let component = self.component;
        self.remap_states = component
            .remap_states
            .iter()
            .map(|state| FormattedRemapState {
                name: state.name.clone(),
                ports: state
                    .remap_ports
                    .iter()
                    .map(|remap| {
                        let port = component.port_by_name(&remap.port_name_ref);
                        if port.is_none() {
                            let name = &remap.port_name_ref;
                            sink.emit(warning_unknown_remap_port(&state.name, name));
                        }
                        FormattedRemapPort {
                            port,
                            port_name: remap.port_name_ref.clone(),
                            value: formatter.format_referring_expression(&remap.value),
                        }
                    })
                    .collect(),
            })
            .collect();
    }

    /// Merges module parameters into the component parameters.
    ///
    /// A module parameter whose value mentions the name of an accumulated
    /// parameter replaces the first such parameter. When the value is
    /// exactly that name, the module parameter takes over its value.
    fn parse_meta_parameters(&mut self) {
        let mut merged = self.parameters.clone();
        for module in &self.module_parameters {
            let mut module = module.clone();
            let hit = merged
                .iter()
                .position(|p| !p.name.is_empty() && module.value.contains(p.name.as_str()));
            if let Some(index) = hit {
                let replaced = merged.remove(index);
                if module.value == replaced.name {
                    module.value = replaced.value.clone();
                }
                tracing::trace!(
                    module_parameter = %module.name,
                    replaced = %replaced.name,
                    "merged module parameter"
                );
            }
            merged.push(module);
        }
        self.meta_parameters = merged;
    }

    /// Evaluates the raw parameter values for display.
    ///
    /// Component parameters come first, then module parameters, each group
    /// in dependency order. Values that do not evaluate are reported as
    /// `W303` and shown as `n/a`.
    pub fn resolve_parameters(
        &self,
        parser: &dyn ExpressionParser,
        sink: &DiagnosticSink,
    ) -> Vec<ResolvedParameter> {
        let finder = self.parameter_finder();
        let formatter = ExpressionFormatter::new(&finder);

        let mut parameters = self.component.parameters.clone();
        let mut module_parameters = self
            .instantiation
            .map(|i| i.module_parameters.clone())
            .unwrap_or_default();
        sort_parameters(&mut parameters);
        sort_parameters(&mut module_parameters);

        parameters
            .into_iter()
            .chain(module_parameters)
            .map(|parameter| {
                let formatted = formatter.format(&parameter.value, parser);
                if !formatted.is_valid {
                    sink.emit(warning_invalid_parameter(&parameter.name, &parameter.value));
                }
                ResolvedParameter {
                    name: parameter.name,
                    value_id: parameter.value_id,
                    kind: parameter.kind,
                    text: formatted.text,
                    is_valid: formatted.is_valid,
                }
            })
            .collect()
    }

    /// Copies the derived state into an owned snapshot.
    pub fn snapshot(&self) -> MetaSnapshot {
        MetaSnapshot {
            module_name: self.module_name.clone(),
            parameters: self.parameters.clone(),
            module_parameters: self.module_parameters.clone(),
            meta_parameters: self.meta_parameters.clone(),
            ports: self.ports.clone(),
            file_sets: self.file_sets.iter().map(|f| f.name.clone()).collect(),
            remap_states: self.remap_states.clone(),
        }
    }

    /// Content hash of the snapshot.
    pub fn fingerprint(&self) -> MetaResult<ContentHash> {
        let bytes = bincode::serde::encode_to_vec(self.snapshot(), bincode::config::standard())
            .map_err(|e| InternalError::new(format!("snapshot encoding failed: {e}")))?;
        Ok(ContentHash::from_bytes(&bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{W300, W301, W302, W303};
    use ipmeta_common::Vlnv;
    use ipmeta_expr::SystemVerilogExpressionParser;
    use ipmeta_model::{Direction, Port, RemapState};

    fn fifo() -> Component {
        Component::new(Vlnv::new("tut.fi", "ip.hw", "fifo", "1.0"))
            .with_parameter(Parameter::new("WIDTH", "uuid_w", "8"))
            .with_parameter(Parameter::new("ADDR", "uuid_a", "$clog2(uuid_d)"))
            .with_parameter(Parameter::new("DEPTH", "uuid_d", "uuid_w*4"))
            .with_port(Port::wire("data_in", Direction::In).with_vector("uuid_w-1", "0"))
            .with_port(
                Port::wire("mem", Direction::Out)
                    .with_vector("7", "0")
                    .with_array("uuid_d-1", "0"),
            )
            .with_port(Port::transactional("tlm", "uuid_w*8"))
            .with_view(View::new("rtl", "verilog"))
            .with_view(View::new("broken", "missing_impl"))
            .with_instantiation(
                ComponentInstantiation::new("verilog", "fifo_top")
                    .with_module_parameter(Parameter::module("DATA_WIDTH", "uuid_mdw", "uuid_w"))
                    .with_file_set_ref("rtl_files")
                    .with_file_set_ref("docs"),
            )
            .with_file_set(FileSet::new("rtl_files", vec!["fifo.v".to_string()]))
            .with_remap_state(
                RemapState::new("sleep")
                    .with_port("data_in", "uuid_w")
                    .with_port("gone", "0"),
            )
    }

    fn names(params: &[Parameter]) -> Vec<&str> {
        params.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn construction_follows_active_view() {
        let c = fifo();
        let sink = DiagnosticSink::new();
        let meta = MetaComponent::new(&c, c.view("rtl"), &sink);

        assert_eq!(meta.module_name(), "fifo_top");
        assert_eq!(meta.file_sets().len(), 1);
        assert_eq!(meta.file_sets()[0].name, "rtl_files");
        assert_eq!(sink.count_code(W301), 1);
        assert_eq!(names(meta.module_parameters()), ["DATA_WIDTH"]);
        assert_eq!(meta.parameters()[1].value, "$clog2(uuid_d)");
        assert!(meta.meta_parameters().is_empty());
    }

    #[test]
    fn no_view_uses_component_name() {
        let c = fifo();
        let sink = DiagnosticSink::new();
        let meta = MetaComponent::new(&c, None, &sink);
        assert_eq!(meta.module_name(), "fifo");
        assert!(meta.instantiation().is_none());
        assert!(meta.module_parameters().is_empty());
        assert_eq!(meta.parameters().len(), 3);
        assert!(sink.is_empty());
    }

    #[test]
    fn missing_instantiation_is_reported() {
        let c = fifo();
        let sink = DiagnosticSink::new();
        let meta = MetaComponent::new(&c, c.view("broken"), &sink);
        assert_eq!(meta.module_name(), "fifo");
        assert!(meta.file_sets().is_empty());
        assert_eq!(sink.count_code(W300), 1);
    }

    #[test]
    fn empty_module_name_falls_back() {
        let c = Component::new(Vlnv::new("v", "l", "counter", "1.0"))
            .with_view(View::new("rtl", "impl"))
            .with_instantiation(ComponentInstantiation::new("impl", ""));
        let meta = MetaComponent::new(&c, c.view("rtl"), &DiagnosticSink::new());
        assert_eq!(meta.module_name(), "counter");
        assert!(meta.instantiation().is_some());
    }

    #[test]
    fn parameters_are_sorted_and_formatted() {
        let c = fifo();
        let sink = DiagnosticSink::new();
        let mut meta = MetaComponent::new(&c, c.view("rtl"), &sink);
        meta.format_component(&sink);

        assert_eq!(names(meta.parameters()), ["WIDTH", "DEPTH", "ADDR"]);
        let values: Vec<&str> = meta.parameters().iter().map(|p| p.value.as_str()).collect();
        assert_eq!(values, ["8", "WIDTH*4", "$clog2(DEPTH)"]);
        assert_eq!(meta.module_parameters()[0].value, "WIDTH");
    }

    #[test]
    fn ports_are_projected() {
        let c = fifo();
        let sink = DiagnosticSink::new();
        let mut meta = MetaComponent::new(&c, c.view("rtl"), &sink);
        meta.format_component(&sink);

        let data_in = &meta.ports()["data_in"];
        assert!(data_in.is_wire && !data_in.is_transactional);
        assert_eq!((data_in.vector_left.as_str(), data_in.vector_right.as_str()), ("WIDTH-1", "0"));
        assert_eq!(data_in.array_left, "");

        let mem = &meta.ports()["mem"];
        assert_eq!(mem.array_left, "DEPTH-1");
        assert_eq!(mem.vector_left, "7");

        let tlm = &meta.ports()["tlm"];
        assert!(tlm.is_transactional && !tlm.is_wire);
        assert_eq!(tlm.width, "WIDTH*8");
        assert_eq!(tlm.vector_left, "");
        assert_eq!(tlm.port, c.port_by_name("tlm").unwrap());
    }

    #[test]
    fn remap_states_resolve_ports() {
        let c = fifo();
        let sink = DiagnosticSink::new();
        let mut meta = MetaComponent::new(&c, None, &sink);
        meta.format_component(&sink);

        let state = &meta.remap_states()[0];
        assert_eq!(state.name, "sleep");
        assert_eq!(state.ports[0].port, c.port_by_name("data_in"));
        assert_eq!(state.ports[0].value, "WIDTH");
        assert_eq!(state.ports[1].port, None);
        assert_eq!(state.ports[1].port_name, "gone");
        assert_eq!(sink.count_code(W302), 1);
    }

    #[test]
    fn module_parameter_aliasing_a_parameter_replaces_it() {
        let c = fifo();
        let sink = DiagnosticSink::new();
        let mut meta = MetaComponent::new(&c, c.view("rtl"), &sink);
        meta.format_component(&sink);

        assert_eq!(names(meta.meta_parameters()), ["DEPTH", "ADDR", "DATA_WIDTH"]);
        let data_width = &meta.meta_parameters()[2];
        assert_eq!(data_width.value, "8");
        assert!(data_width.is_module_parameter());
    }

    #[test]
    fn formatting_is_idempotent_and_leaves_source_untouched() {
        let c = fifo();
        let before = c.clone();
        let sink = DiagnosticSink::new();
        let mut meta = MetaComponent::new(&c, c.view("rtl"), &sink);

        meta.format_component(&sink);
        let first = meta.snapshot();
        let first_hash = meta.fingerprint().unwrap();
        meta.format_component(&sink);

        assert_eq!(meta.snapshot(), first);
        assert_eq!(meta.fingerprint().unwrap(), first_hash);
        assert_eq!(c, before);
    }

    #[test]
    fn fingerprint_tracks_content() {
        let c = fifo();
        let sink = DiagnosticSink::new();
        let mut with_view = MetaComponent::new(&c, c.view("rtl"), &sink);
        let mut without_view = MetaComponent::new(&c, None, &sink);
        with_view.format_component(&sink);
        without_view.format_component(&sink);
        assert_ne!(
            with_view.fingerprint().unwrap(),
            without_view.fingerprint().unwrap()
        );
    }

    #[test]
    fn resolve_parameters_evaluates_raw_values() {
        let c = Component::new(Vlnv::new("tut.fi", "ip.hw", "ram", "1.0"))
            .with_parameter(Parameter::new("WIDTH", "uuid_w", "8"))
            .with_parameter(Parameter::new("DEPTH", "uuid_d", "uuid_w*4"))
            .with_parameter(Parameter::new("ZBROKEN", "uuid_x", "1 +"))
            .with_view(View::new("rtl", "impl"))
            .with_instantiation(
                ComponentInstantiation::new("impl", "ram")
                    .with_module_parameter(Parameter::module("DATA_WIDTH", "uuid_mdw", "uuid_w")),
            );
        let sink = DiagnosticSink::new();
        let meta = MetaComponent::new(&c, c.view("rtl"), &sink);
        let finder = meta.parameter_finder();
        let parser = SystemVerilogExpressionParser::new(&finder);

        let resolved = meta.resolve_parameters(&parser, &sink);
        let texts: Vec<(&str, &str)> = resolved
            .iter()
            .map(|r| (r.name.as_str(), r.text.as_str()))
            .collect();
        assert_eq!(
            texts,
            [
                ("WIDTH", "8"),
                ("DEPTH", "32"),
                ("ZBROKEN", "n/a"),
                ("DATA_WIDTH", "8"),
            ]
        );
        assert!(!resolved[2].is_valid);
        assert_eq!(resolved[3].kind, ParameterKind::ModuleParameter);
        assert_eq!(sink.count_code(W303), 1);
    }

    #[test]
    fn snapshot_serde_roundtrip() {
        let c = fifo();
        let sink = DiagnosticSink::new();
        let mut meta = MetaComponent::new(&c, c.view("rtl"), &sink);
        meta.format_component(&sink);
        let snapshot = meta.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: MetaSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
        assert_eq!(back.file_sets, ["rtl_files"]);
    }
}
