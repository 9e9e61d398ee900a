//! End-to-end preparation of a component for generation.

use crate::errors::warning_view_not_found;
use crate::meta_component::MetaComponent;
use ipmeta_config::{load_config, ConfigError, ProjectConfig};
use ipmeta_diagnostics::DiagnosticSink;
use ipmeta_model::Component;
use ipmeta_pin_import::errors::error_unreadable_pin_file;
use ipmeta_pin_import::{load_pin_file, ImportPlugin, QuartusPinImportPlugin};
use ipmeta_source::SourceDb;
use std::path::Path;

/// Imports the configured pin files into `component`, then builds and
/// formats its meta-component under the configured view.
///
/// Unreadable pin files and unknown views are reported to `sink`; the
/// remaining steps still run.
pub fn prepare<'c>(
    component: &'c mut Component,
    config: &ProjectConfig,
    project_dir: &Path,
    source_db: &mut SourceDb,
    sink: &DiagnosticSink,
) -> MetaComponent<'c> {
    if let Some(expected) = config.component_vlnv() {
        if expected != component.vlnv {
            tracing::warn!(%expected, actual = %component.vlnv, "component does not match project");
        }
    }

    let importer = QuartusPinImportPlugin::new();
    for pin_file in &config.import.pin_files {
        let path = project_dir.join(pin_file);
        match load_pin_file(source_db, &path) {
            Ok(id) => {
                importer.import(source_db.get_file(id), component, sink);
            }
            Err(err) => sink.emit(error_unreadable_pin_file(&err)),
        }
    }

    let component: &'c Component = component;
    let view = config.generate.view.as_deref().and_then(|name| {
        let view = component.view(name);
        if view.is_none() {
            sink.emit(warning_view_not_found(name, component.vlnv.name()));
        }
        view
    });

    let mut meta = MetaComponent::new(component, view, sink);
    meta.format_component(sink);
    meta
}

/// Loads `ipmeta.toml` from `project_dir` and runs [`prepare`].
pub fn prepare_project<'c>(
    component: &'c mut Component,
    project_dir: &Path,
    source_db: &mut SourceDb,
    sink: &DiagnosticSink,
) -> Result<MetaComponent<'c>, ConfigError> {
    let config = load_config(project_dir)?;
    Ok(prepare(component, &config, project_dir, source_db, sink))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::W304;
    use ipmeta_common::Vlnv;
    use ipmeta_config::load_config_from_str;
    use ipmeta_model::{ComponentInstantiation, Direction, View};
    use ipmeta_pin_import::errors::E400;

    fn board() -> Component {
        Component::new(Vlnv::new("tut.fi", "board", "blinky", "1.0"))
            .with_view(View::new("rtl", "verilog"))
            .with_instantiation(ComponentInstantiation::new("verilog", "blinky_top"))
    }

    #[test]
    fn imports_pins_and_formats() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("blinky.pin"),
            "LED[0] : PIN_A15 : output : 3.3-V LVTTL :\nKEY[0] : PIN_J15 : input : 3.3-V LVTTL :\n",
        )
        .unwrap();
        let config = load_config_from_str(
            "[project]\nname = \"blinky\"\n[generate]\nview = \"rtl\"\n[import]\npin_files = [\"blinky.pin\"]\n",
        )
        .unwrap();

        let mut component = board();
        let mut db = SourceDb::new();
        let sink = DiagnosticSink::new();
        let meta = prepare(&mut component, &config, dir.path(), &mut db, &sink);

        assert_eq!(meta.module_name(), "blinky_top");
        assert_eq!(meta.ports().len(), 2);
        assert!(meta.ports()["PIN_A15"].is_wire);
        let led = meta.component().port_by_name("PIN_A15").unwrap();
        assert_eq!(meta.component().port(led).unwrap().direction, Direction::Out);
        assert!(sink.is_empty());
        assert_eq!(db.len(), 1);
    }

    #[test]
    fn missing_pin_file_and_view_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from_str(
            "[project]\nname = \"blinky\"\n[generate]\nview = \"gate\"\n[import]\npin_files = [\"absent.pin\"]\n",
        )
        .unwrap();

        let mut component = board();
        let mut db = SourceDb::new();
        let sink = DiagnosticSink::new();
        let meta = prepare(&mut component, &config, dir.path(), &mut db, &sink);

        assert_eq!(meta.module_name(), "blinky");
        assert_eq!(sink.count_code(E400), 1);
        assert_eq!(sink.count_code(W304), 1);
        assert!(sink.has_errors());
    }

    #[test]
    fn prepare_project_reads_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("ipmeta.toml"),
            "[project]\nname = \"blinky\"\ncomponent = \"tut.fi:board:blinky:1.0\"\n[generate]\nview = \"rtl\"\n",
        )
        .unwrap();

        let mut component = board();
        let mut db = SourceDb::new();
        let sink = DiagnosticSink::new();
        let meta = prepare_project(&mut component, dir.path(), &mut db, &sink).unwrap();
        assert_eq!(meta.module_name(), "blinky_top");
    }

    #[test]
    fn prepare_project_without_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut component = board();
        let result = prepare_project(
            &mut component,
            dir.path(),
            &mut SourceDb::new(),
            &DiagnosticSink::new(),
        );
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
