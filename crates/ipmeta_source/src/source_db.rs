//! Owner of every text source loaded during a session.

use crate::source_file::SourceFile;
use crate::span::{FileId, ResolvedSpan, Span};
use std::io;
use std::path::{Path, PathBuf};

/// Database of loaded sources, resolving spans back to text and coordinates.
#[derive(Default)]
pub struct SourceDb {
    files: Vec<SourceFile>,
}

impl SourceDb {
    /// Creates an empty database.
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Reads a file from disk.
    pub fn load_file(&mut self, path: &Path) -> Result<FileId, io::Error> {
        let content = std::fs::read_to_string(path)?;
        Ok(self.add_source(path, content))
    }

    /// Adds in-memory text under a display name.
    pub fn add_source(&mut self, name: impl Into<PathBuf>, content: String) -> FileId {
        let id = FileId::from_raw(self.files.len() as u32);
        self.files.push(SourceFile::new(id, name.into(), content));
        id
    }

    /// Returns the source for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this database.
    pub fn get_file(&self, id: FileId) -> &SourceFile {
        &self.files[id.as_raw() as usize]
    }

    /// Returns the source for `id`, or `None` for foreign or dummy ids.
    pub fn try_get_file(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.as_raw() as usize)
    }

    /// Resolves a span to line/column coordinates.
    pub fn resolve_span(&self, span: Span) -> Option<ResolvedSpan> {
        let file = self.try_get_file(span.file)?;
        let (start_line, start_col) = file.line_col(span.start);
        let (end_line, end_col) = file.line_col(span.end.saturating_sub(1).max(span.start));
        Some(ResolvedSpan {
            file_path: file.path.clone(),
            start_line,
            start_col,
            end_line,
            end_col,
        })
    }

    /// Returns the text a span covers.
    pub fn snippet(&self, span: Span) -> &str {
        self.get_file(span.file).snippet(span.start, span.end)
    }

    /// Number of loaded sources.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` if nothing has been loaded.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn add_and_get() {
        let mut db = SourceDb::new();
        let id = db.add_source("top.pin", "GND : A1 : gnd :".to_string());
        assert_eq!(db.get_file(id).content, "GND : A1 : gnd :");
        assert_eq!(db.len(), 1);
    }

    #[test]
    fn resolve_span_on_second_line() {
        let mut db = SourceDb::new();
        let id = db.add_source("top.pin", "abc\r\ndef".to_string());
        let resolved = db.resolve_span(Span::new(id, 5, 8)).unwrap();
        assert_eq!(resolved.file_path, PathBuf::from("top.pin"));
        assert_eq!((resolved.start_line, resolved.start_col), (2, 1));
        assert_eq!((resolved.end_line, resolved.end_col), (2, 3));
    }

    #[test]
    fn dummy_span_does_not_resolve() {
        let db = SourceDb::new();
        assert!(db.resolve_span(Span::DUMMY).is_none());
    }

    #[test]
    fn snippet_of_span() {
        let mut db = SourceDb::new();
        let id = db.add_source("x.pin", "hello world".to_string());
        assert_eq!(db.snippet(Span::new(id, 6, 11)), "world");
    }

    #[test]
    fn load_file_from_disk() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, "LED0 : W15 : output :").unwrap();

        let mut db = SourceDb::new();
        let id = db.load_file(tmp.path()).unwrap();
        assert_eq!(db.get_file(id).content, "LED0 : W15 : output :");
        assert_eq!(db.get_file(id).path, tmp.path());
    }

    #[test]
    fn load_missing_file_errors() {
        let mut db = SourceDb::new();
        assert!(db.load_file(Path::new("/nonexistent/top.pin")).is_err());
        assert!(db.is_empty());
    }
}
