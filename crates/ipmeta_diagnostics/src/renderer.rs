//! Rendering diagnostics to text.

use crate::diagnostic::Diagnostic;
use crate::label::LabelStyle;
use ipmeta_source::SourceDb;
use std::fmt::Write;

/// Formats a diagnostic for some output target.
pub trait DiagnosticRenderer {
    /// Renders one diagnostic.
    fn render(&self, diag: &Diagnostic, source_db: &SourceDb) -> String;
}

/// Renders in a rustc-like layout:
///
/// ```text
/// warning[W400]: unrecognized pin direction `analog`
///   --> pins/top.pin:14:1
///    |
/// 14 | ADC_IN : C3 : analog :
///    |               ^^^^^^ port left phantom
///    |
///    = in: remap state 'sleep'
///    = note: ...
/// ```
pub struct TerminalRenderer {
    /// Emit ANSI colors.
    pub color: bool,
}

impl TerminalRenderer {
    /// Creates a renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn header(&self, diag: &Diagnostic) -> String {
        let head = format!("{}[{}]", diag.severity, diag.code);
        if !self.color {
            return head;
        }
        let color = if diag.severity.is_error() { 31 } else { 33 };
        format!("\x1b[1;{color}m{head}\x1b[0m")
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic, source_db: &SourceDb) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}: {}", self.header(diag), diag.message);

        if let Some(resolved) = source_db.resolve_span(diag.primary_span) {
            let file = source_db.get_file(diag.primary_span.file);
            let line_num = resolved.start_line.to_string();
            let padding = " ".repeat(line_num.len());
            let line_text = file
                .lines()
                .get(resolved.start_line as usize - 1)
                .map_or("", |line| file.snippet(line.start, line.end));

            let primary_msg = diag
                .labels
                .iter()
                .find(|l| l.style == LabelStyle::Primary)
                .map(|l| format!(" {}", l.message))
                .unwrap_or_default();
            let carets = "^".repeat(diag.primary_span.len().max(1) as usize);
            let col_padding = " ".repeat(resolved.start_col.saturating_sub(1) as usize);

            let _ = writeln!(out, "  --> {resolved}");
            let _ = writeln!(out, "{padding} |");
            let _ = writeln!(out, "{line_num} | {line_text}");
            let _ = writeln!(out, "{padding} | {col_padding}{carets}{primary_msg}");
        }

        if let Some(subject) = &diag.subject {
            let _ = writeln!(out, "   = in: {subject}");
        }
        for note in &diag.notes {
            let _ = writeln!(out, "   = note: {note}");
        }
        for help in &diag.help {
            let _ = writeln!(out, "   = help: {help}");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::{Category, DiagnosticCode};
    use crate::label::Label;
    use ipmeta_source::Span;

    #[test]
    fn render_span_diagnostic() {
        let mut db = SourceDb::new();
        let id = db.add_source("top.pin", "GND : A1 : gnd :\r\nADC : C3 : analog :".to_string());
        let span = Span::new(id, 29, 35);
        let diag = Diagnostic::warning(
            DiagnosticCode::new(Category::Warning, 400),
            "unrecognized pin direction `analog`",
            span,
        )
        .with_label(Label::primary(span, "port left phantom"));

        let out = TerminalRenderer::new(false).render(&diag, &db);
        assert!(out.contains("warning[W400]: unrecognized pin direction `analog`"));
        assert!(out.contains("--> top.pin:2:12"));
        assert!(out.contains("2 | ADC : C3 : analog :"));
        assert!(out.contains("^^^^^^ port left phantom"));
    }

    #[test]
    fn render_model_diagnostic_with_subject() {
        let db = SourceDb::new();
        let diag = Diagnostic::warning(
            DiagnosticCode::new(Category::Warning, 302),
            "remap port refers to unknown port `irq`",
            Span::DUMMY,
        )
        .with_subject("remap state 'sleep'")
        .with_help("rename the remap port or add the port");

        let out = TerminalRenderer::new(false).render(&diag, &db);
        assert!(out.starts_with("warning[W302]: remap port refers to unknown port `irq`"));
        assert!(!out.contains("-->"));
        assert!(out.contains("= in: remap state 'sleep'"));
        assert!(out.contains("= help: rename the remap port or add the port"));
    }

    #[test]
    fn color_wraps_header() {
        let db = SourceDb::new();
        let diag = Diagnostic::error(DiagnosticCode::new(Category::Error, 400), "x", Span::DUMMY);
        let out = TerminalRenderer::new(true).render(&diag, &db);
        assert!(out.starts_with("\x1b[1;31merror[E400]\x1b[0m: x"));
    }
}
