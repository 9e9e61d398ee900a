//! A loaded text source with precomputed line boundaries.

use crate::span::{FileId, Span};
use ipmeta_common::ContentHash;
use std::path::PathBuf;

/// One line of a source, without its terminator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line {
    /// Byte offset of the first character.
    pub start: u32,
    /// Byte offset one past the last character (terminator excluded).
    pub end: u32,
}

/// A text source loaded into the [`SourceDb`](crate::SourceDb).
///
/// Lines are split on `\r\n`, `\n\r`, `\n` and bare `\r`, so pin reports
/// written on any platform yield the same lines.
pub struct SourceFile {
    /// Identifier within the owning database.
    pub id: FileId,
    /// Filesystem path or synthetic name.
    pub path: PathBuf,
    /// Full text.
    pub content: String,
    /// Fingerprint of `content`.
    pub content_hash: ContentHash,
    lines: Vec<Line>,
}

impl SourceFile {
    /// Creates a source and computes its line table.
    pub fn new(id: FileId, path: PathBuf, content: String) -> Self {
        let lines = split_lines(&content);
        let content_hash = ContentHash::from_bytes(content.as_bytes());
        Self {
            id,
            path,
            content,
            content_hash,
            lines,
        }
    }

    /// Returns the line table.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Iterates over `(span, text)` for every line.
    pub fn line_texts(&self) -> impl Iterator<Item = (Span, &str)> {
        self.lines.iter().map(move |line| {
            (
                Span::new(self.id, line.start, line.end),
                &self.content[line.start as usize..line.end as usize],
            )
        })
    }

    /// Span covering the whole text.
    pub fn full_span(&self) -> Span {
        Span::new(self.id, 0, self.content.len() as u32)
    }

    /// Converts a byte offset to 1-indexed `(line, column)`.
    ///
    /// Offsets inside a line terminator resolve to the line it terminates.
    pub fn line_col(&self, byte_offset: u32) -> (u32, u32) {
        let idx = match self
            .lines
            .binary_search_by(|line| line.start.cmp(&byte_offset))
        {
            Ok(idx) => idx,
            Err(idx) => idx.saturating_sub(1),
        };
        let start = self.lines.get(idx).map_or(0, |line| line.start);
        (idx as u32 + 1, byte_offset.saturating_sub(start) + 1)
    }

    /// Returns the text between two byte offsets.
    pub fn snippet(&self, start: u32, end: u32) -> &str {
        &self.content[start as usize..end as usize]
    }
}

/// Splits text into lines on any of `\r\n`, `\n\r`, `\n`, `\r`.
fn split_lines(content: &str) -> Vec<Line> {
    let bytes = content.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;

    while i < bytes.len() {
        let terminator = match (bytes[i], bytes.get(i + 1)) {
            (b'\r', Some(b'\n')) | (b'\n', Some(b'\r')) => 2,
            (b'\r', _) | (b'\n', _) => 1,
            _ => 0,
        };
        if terminator == 0 {
            i += 1;
            continue;
        }
        lines.push(Line {
            start: start as u32,
            end: i as u32,
        });
        i += terminator;
        start = i;
    }

    lines.push(Line {
        start: start as u32,
        end: bytes.len() as u32,
    });
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_file(content: &str) -> SourceFile {
        SourceFile::new(
            FileId::from_raw(0),
            PathBuf::from("top.pin"),
            content.to_string(),
        )
    }

    fn texts(file: &SourceFile) -> Vec<&str> {
        file.line_texts().map(|(_, text)| text).collect()
    }

    #[test]
    fn unix_line_endings() {
        let f = make_file("a\nbc\ndef");
        assert_eq!(texts(&f), vec!["a", "bc", "def"]);
    }

    #[test]
    fn windows_line_endings() {
        let f = make_file("a\r\nbc\r\ndef");
        assert_eq!(texts(&f), vec!["a", "bc", "def"]);
    }

    #[test]
    fn reversed_and_bare_cr_endings() {
        let f = make_file("a\n\rbc\rdef");
        assert_eq!(texts(&f), vec!["a", "bc", "def"]);
    }

    #[test]
    fn blank_lines_are_kept() {
        let f = make_file("a\n\nb\n");
        assert_eq!(texts(&f), vec!["a", "", "b", ""]);
    }

    #[test]
    fn empty_file_has_one_empty_line() {
        let f = make_file("");
        assert_eq!(f.lines(), &[Line { start: 0, end: 0 }]);
        assert_eq!(f.line_col(0), (1, 1));
    }

    #[test]
    fn line_col_resolution() {
        let f = make_file("abc\r\ndef\rghi");
        assert_eq!(f.line_col(0), (1, 1));
        assert_eq!(f.line_col(2), (1, 3));
        assert_eq!(f.line_col(5), (2, 1));
        assert_eq!(f.line_col(6), (2, 2));
        assert_eq!(f.line_col(9), (3, 1));
    }

    #[test]
    fn line_spans_point_into_content() {
        let f = make_file("GND : A1 : gnd :\r\nclk : B2 : input :");
        let (span, text) = f.line_texts().nth(1).unwrap();
        assert_eq!(f.snippet(span.start, span.end), text);
        assert_eq!(text, "clk : B2 : input :");
    }

    #[test]
    fn content_hash_matches_content() {
        let f = make_file("pins");
        assert_eq!(f.content_hash, ContentHash::from_bytes(b"pins"));
        assert_eq!(f.full_span().len(), 4);
    }
}
