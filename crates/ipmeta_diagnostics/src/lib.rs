//! Structured, non-fatal findings reported while importing and formatting
//! component models.
//!
//! Nothing in the meta pipeline aborts on a malformed model. Instead, each
//! finding becomes a [`Diagnostic`] collected in a [`DiagnosticSink`], which a
//! caller may render with a [`DiagnosticRenderer`] or ignore entirely.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod label;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::Diagnostic;
pub use label::{Label, LabelStyle};
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::DiagnosticSink;
