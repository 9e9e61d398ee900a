//! The diagnostic message type.

use crate::code::DiagnosticCode;
use crate::label::Label;
use crate::severity::Severity;
use ipmeta_source::Span;
use serde::{Deserialize, Serialize};

/// A structured finding.
///
/// Findings about text inputs (pin files) carry a real `primary_span`.
/// Findings about the in-memory component model use [`Span::DUMMY`] and name
/// the offending element in `subject` instead, e.g. `remap state 'sleep'`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity.
    pub severity: Severity,
    /// Code identifying the kind of finding.
    pub code: DiagnosticCode,
    /// One-line message.
    pub message: String,
    /// Main location in text, or `Span::DUMMY`.
    pub primary_span: Span,
    /// Model element the finding is about.
    pub subject: Option<String>,
    /// Extra annotated spans.
    pub labels: Vec<Label>,
    /// `note:` lines.
    pub notes: Vec<String>,
    /// `help:` lines.
    pub help: Vec<String>,
}

impl Diagnostic {
    fn new(severity: Severity, code: DiagnosticCode, message: String, span: Span) -> Self {
        Self {
            severity,
            code,
            message,
            primary_span: span,
            subject: None,
            labels: Vec::new(),
            notes: Vec::new(),
            help: Vec::new(),
        }
    }

    /// Creates an error.
    pub fn error(code: DiagnosticCode, message: impl Into<String>, span: Span) -> Self {
        Self::new(Severity::Error, code, message.into(), span)
    }

    /// Creates a warning.
    pub fn warning(code: DiagnosticCode, message: impl Into<String>, span: Span) -> Self {
        Self::new(Severity::Warning, code, message.into(), span)
    }

    /// Creates a note.
    pub fn note(code: DiagnosticCode, message: impl Into<String>, span: Span) -> Self {
        Self::new(Severity::Note, code, message.into(), span)
    }

    /// Names the model element this finding is about.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Adds a label.
    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    /// Adds a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Adds a help line.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }
}
