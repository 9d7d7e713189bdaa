//! Document model - represents the text buffer and file state
//!
//! Loading and saving are whole-file operations. Saving writes the buffer
//! text verbatim and is not atomic: a crash mid-write can leave the target
//! truncated.

use ropey::Rope;
use std::path::{Path, PathBuf};

use crate::error::{EditorError, Result};
use crate::syntax::LanguageId;

/// Read a whole text file.
///
/// The content must be valid UTF-8; anything else is reported as an I/O
/// error carrying the path.
pub fn load(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| EditorError::io(path, e))
}

/// Write `text` to `path`, replacing any previous content
pub fn save(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).map_err(|e| EditorError::io(path, e))
}

/// Document state - the text buffer and associated file metadata
#[derive(Debug, Clone)]
pub struct Document {
    /// The text buffer
    pub buffer: Rope,
    /// Path to the file on disk (None until the first open or save-as)
    pub file_path: Option<PathBuf>,
    /// Whether the buffer has unsaved changes
    pub is_modified: bool,
    /// Detected language, shown in the info bar
    pub language: LanguageId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Create a document with initial text
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: Rope::from(text),
            file_path: None,
            is_modified: false,
            language: LanguageId::PlainText,
        }
    }

    /// Load a document from a file path
    pub fn from_file(path: PathBuf) -> Result<Self> {
        let content = load(&path)?;
        let language = LanguageId::from_path(&path);
        Ok(Self {
            buffer: Rope::from(content),
            file_path: Some(path),
            is_modified: false,
            language,
        })
    }

    /// Write the buffer to `path` and make it the document's path
    pub fn save_to(&mut self, path: PathBuf) -> Result<()> {
        save(&path, &self.text())?;
        self.language = LanguageId::from_path(&path);
        self.file_path = Some(path);
        self.is_modified = false;
        Ok(())
    }

    /// The full buffer contents
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Get the display name for this document.
    pub fn display_name(&self) -> String {
        self.file_path
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    /// Get the number of lines in the document
    pub fn line_count(&self) -> usize {
        self.buffer.len_lines()
    }

    /// Get a line by index without its line terminator
    pub fn get_line(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.buffer.len_lines() {
            return None;
        }
        let line = self.buffer.line(line_idx).to_string();
        Some(
            line.strip_suffix('\n')
                .map(|l| l.strip_suffix('\r').unwrap_or(l))
                .unwrap_or(line.as_str())
                .to_string(),
        )
    }

    /// Get the length of a line in chars (excluding the line terminator)
    pub fn line_length(&self, line_idx: usize) -> usize {
        self.get_line(line_idx)
            .map(|line| line.chars().count())
            .unwrap_or(0)
    }

    /// Convert a (line, column) position to a buffer char offset
    pub fn cursor_to_offset(&self, line: usize, column: usize) -> usize {
        if line >= self.buffer.len_lines() {
            return self.buffer.len_chars();
        }
        let line_start = self.buffer.line_to_char(line);
        line_start + column.min(self.line_length(line))
    }

    /// Convert a buffer char offset to (line, column) position
    pub fn offset_to_cursor(&self, offset: usize) -> (usize, usize) {
        let clamped = offset.min(self.buffer.len_chars());
        let line = self.buffer.char_to_line(clamped);
        let line_start = self.buffer.line_to_char(line);
        (line, clamped - line_start)
    }

    /// Insert text at a char offset
    pub fn insert(&mut self, offset: usize, text: &str) {
        let offset = offset.min(self.buffer.len_chars());
        self.buffer.insert(offset, text);
        self.is_modified = true;
    }

    /// Remove the chars in `start..end`
    pub fn remove(&mut self, start: usize, end: usize) {
        let end = end.min(self.buffer.len_chars());
        if start >= end {
            return;
        }
        self.buffer.remove(start..end);
        self.is_modified = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_line_strips_terminators() {
        let doc = Document::with_text("one\r\ntwo\nthree");
        assert_eq!(doc.get_line(0).as_deref(), Some("one"));
        assert_eq!(doc.get_line(1).as_deref(), Some("two"));
        assert_eq!(doc.get_line(2).as_deref(), Some("three"));
        assert_eq!(doc.get_line(3), None);
        assert_eq!(doc.line_length(0), 3);
    }

    #[test]
    fn test_offset_round_trip() {
        let doc = Document::with_text("ab\ncdé\n");
        let offset = doc.cursor_to_offset(1, 3);
        assert_eq!(offset, 6);
        assert_eq!(doc.offset_to_cursor(offset), (1, 3));
        // Columns past the end clamp to the line length
        assert_eq!(doc.cursor_to_offset(0, 99), 2);
    }

    #[test]
    fn test_insert_and_remove_mark_modified() {
        let mut doc = Document::with_text("def");
        assert!(!doc.is_modified);
        doc.insert(3, " f():");
        assert_eq!(doc.text(), "def f():");
        assert!(doc.is_modified);
        doc.remove(3, 8);
        assert_eq!(doc.text(), "def");
    }

    #[test]
    fn test_display_name() {
        let mut doc = Document::new();
        assert_eq!(doc.display_name(), "Untitled");
        doc.file_path = Some(PathBuf::from("/tmp/script.py"));
        assert_eq!(doc.display_name(), "script.py");
    }
}
