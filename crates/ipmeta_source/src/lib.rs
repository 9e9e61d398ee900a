//! Text sources fed into the model by import collaborators.
//!
//! Pin files and other line-oriented inputs are loaded into a [`SourceDb`],
//! split into lines using every line-ending variant, and addressed with
//! [`Span`]s so diagnostics and highlighters can point back into the text.

#![warn(missing_docs)]

pub mod source_db;
pub mod source_file;
pub mod span;

pub use source_db::SourceDb;
pub use source_file::{Line, SourceFile};
pub use span::{FileId, ResolvedSpan, Span};
