//! The import plugin interface and the Quartus pin importer.

use crate::errors::{warning_unknown_direction, PinImportError};
use crate::highlight::{Highlighter, ImportColor};
use crate::syntax::{match_pin_definition, parse_direction, PinDefinition};
use ipmeta_diagnostics::DiagnosticSink;
use ipmeta_model::{Component, Direction, Port};
use ipmeta_source::{FileId, SourceDb, SourceFile, Span};
use std::path::Path;

/// A plugin that populates a component from an external text format.
pub trait ImportPlugin {
    /// Display name.
    fn name(&self) -> &str;
    /// Plugin version.
    fn version(&self) -> &str;
    /// One-line description.
    fn description(&self) -> &str;
    /// Vendor.
    fn vendor(&self) -> &str;
    /// License name.
    fn license(&self) -> &str;
    /// License holder.
    fn license_holder(&self) -> &str;
    /// File types the plugin accepts.
    fn supported_file_types(&self) -> &[&str];

    /// Imports `source` into `component`, reporting findings to `sink`.
    fn import(
        &self,
        source: &SourceFile,
        component: &mut Component,
        sink: &DiagnosticSink,
    ) -> ImportSummary;
}

/// Counts of what an import changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Lines that matched the pin definition pattern.
    pub matched_lines: usize,
    /// Ports added to the component.
    pub created_ports: usize,
    /// Existing ports that were updated.
    pub updated_ports: usize,
}

/// Imports ports from Quartus II `.pin` reports.
#[derive(Default)]
pub struct QuartusPinImportPlugin<'h> {
    highlighter: Option<&'h dyn Highlighter>,
}

impl<'h> QuartusPinImportPlugin<'h> {
    /// Creates an importer without a highlighter.
    pub fn new() -> Self {
        Self { highlighter: None }
    }

    /// Creates an importer that reports styling to `highlighter`.
    pub fn with_highlighter(highlighter: &'h dyn Highlighter) -> Self {
        Self {
            highlighter: Some(highlighter),
        }
    }

    fn create_port(
        &self,
        line_span: Span,
        definition: &PinDefinition<'_>,
        component: &mut Component,
        sink: &DiagnosticSink,
        summary: &mut ImportSummary,
    ) {
        if let Some(highlighter) = self.highlighter {
            highlighter.apply_font_color(line_span, ImportColor::Black);
            highlighter.apply_highlight(line_span, ImportColor::Port);
        }

        let name = definition.location.text;
        let keyword = definition.direction;
        let direction = parse_direction(keyword.text).unwrap_or_else(|| {
            let span = line_span.sub_span(keyword.offset as u32, keyword.text.len() as u32);
            sink.emit(warning_unknown_direction(keyword.text, name, span));
            Direction::Phantom
        });

        let id = match component.port_by_name(name) {
            Some(id) => {
                summary.updated_ports += 1;
                id
            }
            None => {
                summary.created_ports += 1;
                component.add_port(Port::wire(name, Direction::Phantom))
            }
        };
        if let Some(port) = component.port_mut(id) {
            port.direction = direction;
            port.description = definition.usage.text.to_string();
            port.set_port_size(1);
        }
    }
}

impl ImportPlugin for QuartusPinImportPlugin<'_> {
    fn name(&self) -> &str {
        "Quartus II Pin Import"
    }

    fn version(&self) -> &str {
        "1.1"
    }

    fn description(&self) -> &str {
        "Imports ports from Quartus pin file."
    }

    fn vendor(&self) -> &str {
        "TUT"
    }

    fn license(&self) -> &str {
        "GPL2"
    }

    fn license_holder(&self) -> &str {
        "Public"
    }

    fn supported_file_types(&self) -> &[&str] {
        &["quartusPinFile"]
    }

    fn import(
        &self,
        source: &SourceFile,
        component: &mut Component,
        sink: &DiagnosticSink,
    ) -> ImportSummary {
        if let Some(highlighter) = self.highlighter {
            highlighter.apply_font_color(source.full_span(), ImportColor::Gray);
        }

        for port in component.ports.values_mut() {
            port.direction = Direction::Phantom;
        }

        let mut summary = ImportSummary::default();
        for (span, line) in source.line_texts() {
            if let Some(definition) = match_pin_definition(line) {
                summary.matched_lines += 1;
                self.create_port(span, &definition, component, sink, &mut summary);
            }
        }

        tracing::debug!(
            file = %source.path.display(),
            matched = summary.matched_lines,
            created = summary.created_ports,
            updated = summary.updated_ports,
            "imported pin file"
        );
        summary
    }
}

/// Loads a pin file into `db`.
pub fn load_pin_file(db: &mut SourceDb, path: &Path) -> Result<FileId, PinImportError> {
    db.load_file(path).map_err(|source| PinImportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
