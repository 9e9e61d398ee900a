//! Diagnostic codes and error types for pin import.
//!
//! `E400` reports a pin file that could not be read. `W400` reports a pin
//! line whose direction keyword is not recognized; the port is still
//! created with the phantom direction.

use ipmeta_diagnostics::{Category, Diagnostic, DiagnosticCode, Label};
use ipmeta_source::Span;
use std::path::PathBuf;

/// Pin file could not be read.
pub const E400: DiagnosticCode = DiagnosticCode::new(Category::Error, 400);

/// Unrecognized pin direction.
pub const W400: DiagnosticCode = DiagnosticCode::new(Category::Warning, 400);

/// Errors raised before a pin file can be parsed.
#[derive(Debug, thiserror::Error)]
pub enum PinImportError {
    /// The pin file could not be read.
    #[error("cannot read pin file {path}: {source}")]
    Io {
        /// Path of the pin file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Creates a diagnostic for an unreadable pin file.
pub fn error_unreadable_pin_file(err: &PinImportError) -> Diagnostic {
    Diagnostic::error(E400, err.to_string(), Span::DUMMY)
        .with_help("check `import.pin_files` in ipmeta.toml")
}

/// Creates a diagnostic for a direction keyword that maps to no direction.
pub fn warning_unknown_direction(keyword: &str, port: &str, span: Span) -> Diagnostic {
    Diagnostic::warning(
        W400,
        format!("unrecognized pin direction `{keyword}`"),
        span,
    )
    .with_subject(format!("port '{port}'"))
    .with_label(Label::primary(span, "expected input, output, bidir, power or gnd"))
    .with_note("the port is imported with the phantom direction")
}
