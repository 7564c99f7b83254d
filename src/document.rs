//! Document snapshots and text ranges
//!
//! The host hands the engine a [`TextDocument`] per event. Ranges produced by
//! the scanner are byte offsets into its text; [`TextDocument::position_at`]
//! turns them into line/column positions for display.

use std::path::Path;

use unicode_width::UnicodeWidthStr;

/// Language id for files with no known extension
pub const PLAIN_TEXT: &str = "plaintext";

/// Guess an editor language id from a file extension
pub fn language_id_for_path(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return PLAIN_TEXT;
    };
    match ext.to_lowercase().as_str() {
        "html" | "htm" | "xhtml" => "html",
        "xml" | "xsd" | "rss" => "xml",
        "xsl" | "xslt" => "xsl",
        "svg" => "svg",
        "vue" => "vue",
        "svelte" => "svelte",
        "astro" => "astro",
        "md" | "markdown" => "markdown",
        "php" => "php",
        "jsx" => "javascriptreact",
        "tsx" => "typescriptreact",
        "hbs" | "handlebars" => "handlebars",
        "erb" => "erb",
        _ => PLAIN_TEXT,
    }
}

/// A half-open byte range within a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextRange {
    /// Byte offset where this range starts (inclusive)
    pub start: usize,
    /// Byte offset where this range ends (exclusive)
    pub end: usize,
}

impl TextRange {
    /// Create a new range
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Check if this range contains a byte position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Get the length of this range in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if range is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check whether two ranges share at least one byte
    pub fn overlaps(&self, other: &TextRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A line/column position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Zero-based line index
    pub line: usize,
    /// Characters since the start of the line
    pub character: usize,
    /// Display columns since the start of the line
    pub column: usize,
}

/// Snapshot of the active document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    text: String,
    language_id: String,
}

impl TextDocument {
    pub fn new(text: impl Into<String>, language_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language_id: language_id.into(),
        }
    }

    /// Full document text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Language identifier used to pick comment delimiters
    pub fn language_id(&self) -> &str {
        &self.language_id
    }

    /// Slice of text covered by a range, if the range is valid
    pub fn slice(&self, range: TextRange) -> Option<&str> {
        self.text.get(range.start..range.end)
    }

    /// Convert a byte offset into a line/column position
    ///
    /// Offsets past the end clamp to the end of the text. Offsets that fall
    /// inside a multi-byte character are rounded down to its start.
    pub fn position_at(&self, offset: usize) -> Position {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }

        let before = &self.text[..offset];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let prefix = &before[line_start..];

        Position {
            line,
            character: prefix.chars().count(),
            column: prefix.width(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_contains() {
        let range = TextRange::new(5, 10);
        assert!(!range.contains(4));
        assert!(range.contains(5));
        assert!(range.contains(9));
        assert!(!range.contains(10));
        assert_eq!(range.len(), 5);
    }

    #[test]
    fn test_range_overlaps() {
        let a = TextRange::new(0, 4);
        assert!(a.overlaps(&TextRange::new(3, 6)));
        assert!(!a.overlaps(&TextRange::new(4, 6)));
        assert!(TextRange::new(2, 2).is_empty());
    }

    #[test]
    fn test_position_at() {
        let doc = TextDocument::new("<p>\n  <div>", "html");
        assert_eq!(doc.position_at(0), Position { line: 0, character: 0, column: 0 });
        assert_eq!(doc.position_at(6), Position { line: 1, character: 2, column: 2 });
        assert_eq!(doc.position_at(999).line, 1);
    }

    #[test]
    fn test_language_id_for_path() {
        assert_eq!(language_id_for_path(Path::new("index.HTML")), "html");
        assert_eq!(language_id_for_path(Path::new("App.tsx")), "typescriptreact");
        assert_eq!(language_id_for_path(Path::new("notes")), PLAIN_TEXT);
        assert_eq!(language_id_for_path(Path::new("main.rs")), PLAIN_TEXT);
    }

    #[test]
    fn test_position_wide_chars() {
        // "日本" is two chars, six bytes, four display columns
        let doc = TextDocument::new("日本<b>", "html");
        let pos = doc.position_at(6);
        assert_eq!(pos.character, 2);
        assert_eq!(pos.column, 4);
        // Inside a multi-byte char rounds down
        assert_eq!(doc.position_at(4).character, 1);
    }
}
