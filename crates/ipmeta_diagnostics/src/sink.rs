//! Accumulator for diagnostics emitted during a pipeline run.

use crate::code::DiagnosticCode;
use crate::diagnostic::Diagnostic;
use std::cell::{Cell, RefCell};

/// Collects diagnostics behind a shared reference.
///
/// The pipeline is single-threaded, so interior mutability is a plain
/// `RefCell`; stages only ever hold `&DiagnosticSink`.
#[derive(Default)]
pub struct DiagnosticSink {
    diagnostics: RefCell<Vec<Diagnostic>>,
    error_count: Cell<usize>,
}

impl DiagnosticSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic.
    pub fn emit(&self, diag: Diagnostic) {
        if diag.severity.is_error() {
            self.error_count.set(self.error_count.get() + 1);
        }
        self.diagnostics.borrow_mut().push(diag);
    }

    /// Returns `true` if any error was emitted.
    pub fn has_errors(&self) -> bool {
        self.error_count.get() > 0
    }

    /// Number of errors emitted so far.
    pub fn error_count(&self) -> usize {
        self.error_count.get()
    }

    /// Number of diagnostics currently held.
    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Returns `true` if nothing is held.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    /// Returns how many held diagnostics carry `code`.
    pub fn count_code(&self, code: DiagnosticCode) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.code == code)
            .count()
    }

    /// Drains every held diagnostic. The error count is not reset.
    pub fn take_all(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }

    /// Returns a copy of every held diagnostic.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::Category;
    use ipmeta_source::Span;

    const W1: DiagnosticCode = DiagnosticCode::new(Category::Warning, 301);
    const E1: DiagnosticCode = DiagnosticCode::new(Category::Error, 400);

    #[test]
    fn empty_sink() {
        let sink = DiagnosticSink::new();
        assert!(!sink.has_errors());
        assert!(sink.is_empty());
        assert!(sink.take_all().is_empty());
    }

    #[test]
    fn warnings_do_not_count_as_errors() {
        let sink = DiagnosticSink::new();
        sink.emit(Diagnostic::warning(W1, "dangling", Span::DUMMY));
        assert!(!sink.has_errors());
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.count_code(W1), 1);
        assert_eq!(sink.count_code(E1), 0);
    }

    #[test]
    fn take_all_drains_but_keeps_error_count() {
        let sink = DiagnosticSink::new();
        sink.emit(Diagnostic::error(E1, "unreadable", Span::DUMMY));
        sink.emit(Diagnostic::warning(W1, "dangling", Span::DUMMY));
        assert_eq!(sink.take_all().len(), 2);
        assert!(sink.is_empty());
        assert_eq!(sink.error_count(), 1);
    }

    #[test]
    fn diagnostics_snapshot_does_not_drain() {
        let sink = DiagnosticSink::new();
        sink.emit(Diagnostic::warning(W1, "a", Span::DUMMY));
        assert_eq!(sink.diagnostics().len(), 1);
        assert_eq!(sink.diagnostics().len(), 1);
    }
}
