//! Diagnostic codes and helper functions for meta-component assembly.
//!
//! Warning codes `W300`--`W304` report model inconsistencies. None of them
//! stops assembly: the offending reference is dropped or left absent.

use ipmeta_diagnostics::{Category, Diagnostic, DiagnosticCode};
use ipmeta_source::Span;

/// Active view refers to an instantiation that does not exist.
pub const W300: DiagnosticCode = DiagnosticCode::new(Category::Warning, 300);

/// Instantiation refers to a file set that does not exist.
pub const W301: DiagnosticCode = DiagnosticCode::new(Category::Warning, 301);

/// Remap state overrides a port that does not exist.
pub const W302: DiagnosticCode = DiagnosticCode::new(Category::Warning, 302);

/// Parameter value could not be evaluated.
pub const W303: DiagnosticCode = DiagnosticCode::new(Category::Warning, 303);

/// Configured view not found on the component.
pub const W304: DiagnosticCode = DiagnosticCode::new(Category::Warning, 304);

/// Creates a diagnostic for a view whose instantiation is missing.
pub fn warning_missing_instantiation(view: &str, instantiation: &str) -> Diagnostic {
    Diagnostic::warning(
        W300,
        format!("component instantiation `{instantiation}` not found"),
        Span::DUMMY,
    )
    .with_subject(format!("view '{view}'"))
    .with_note("the module name falls back to the component name")
}

/// Creates a diagnostic for a dangling file set reference.
pub fn warning_dangling_file_set(instantiation: &str, file_set: &str) -> Diagnostic {
    Diagnostic::warning(W301, format!("file set `{file_set}` not found"), Span::DUMMY)
        .with_subject(format!("component instantiation '{instantiation}'"))
}

/// Creates a diagnostic for a remap override on an unknown port.
pub fn warning_unknown_remap_port(state: &str, port: &str) -> Diagnostic {
    Diagnostic::warning(W302, format!("unknown port `{port}`"), Span::DUMMY)
        .with_subject(format!("remap state '{state}'"))
}

/// Creates a diagnostic for a parameter value that does not evaluate.
pub fn warning_invalid_parameter(name: &str, value: &str) -> Diagnostic {
    Diagnostic::warning(
        W303,
        format!("cannot evaluate value `{value}`"),
        Span::DUMMY,
    )
    .with_subject(format!("parameter '{name}'"))
}

/// Creates a diagnostic for a configured view missing from the component.
pub fn warning_view_not_found(view: &str, component: &str) -> Diagnostic {
    Diagnostic::warning(W304, format!("view `{view}` not found"), Span::DUMMY)
        .with_subject(format!("component '{component}'"))
        .with_help("set `generate.view` in ipmeta.toml to one of the component's views")
}
