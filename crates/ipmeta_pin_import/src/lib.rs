//! Port import from Quartus II pin report files.
//!
//! [`QuartusPinImportPlugin`] reads a `.pin` report line by line and turns
//! every pin definition into a port of the target component. Ports that
//! already exist are updated in place; all ports are first demoted to the
//! phantom direction so that pins missing from the report stay visible
//! without breaking the component.

#![warn(missing_docs)]

pub mod errors;
pub mod highlight;
pub mod plugin;
pub mod syntax;

pub use errors::PinImportError;
pub use highlight::{Highlighter, ImportColor};
pub use plugin::{load_pin_file, ImportPlugin, ImportSummary, QuartusPinImportPlugin};
pub use syntax::{match_pin_definition, parse_direction, Capture, PinDefinition};
