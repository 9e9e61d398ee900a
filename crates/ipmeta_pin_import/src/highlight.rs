//! Optional observer for highlighting imported text.
//!
//! An editor can show which parts of a pin file produced ports. Import
//! results never depend on whether a highlighter is attached.

use ipmeta_source::Span;

/// Styling intent for a span of imported text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportColor {
    /// Text that produced nothing.
    Gray,
    /// Text that was parsed.
    Black,
    /// Text that defines a port.
    Port,
}

/// Receives styling requests during an import.
///
/// Methods take `&self`; implementations that record requests use interior
/// mutability.
pub trait Highlighter {
    /// Sets the font color of `span`.
    fn apply_font_color(&self, span: Span, color: ImportColor);

    /// Sets the background highlight of `span`.
    fn apply_highlight(&self, span: Span, color: ImportColor);
}
