//! Editor state - cursor and viewport for the single text surface

use super::document::Document;

/// Cursor position in the document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number in chars (0-indexed)
    pub column: usize,
    /// Desired column for vertical movement (preserves position when moving through short lines)
    pub desired_column: Option<usize>,
}

impl Cursor {
    /// Create a new cursor at position (0, 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cursor at a specific position
    pub fn at(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            desired_column: None,
        }
    }

    /// Reset the desired column (called after horizontal movement)
    pub fn clear_desired_column(&mut self) {
        self.desired_column = None;
    }

    /// Set the desired column (called before vertical movement if not set)
    pub fn remember_column(&mut self) {
        if self.desired_column.is_none() {
            self.desired_column = Some(self.column);
        }
    }
}

/// Viewport state - what portion of the document is visible
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    /// First visible line (0-indexed)
    pub top_line: usize,
    /// First visible column (for horizontal scrolling)
    pub left_column: usize,
    /// Number of lines that fit in the viewport
    pub visible_lines: usize,
    /// Number of columns that fit in the viewport
    pub visible_columns: usize,
}

impl Viewport {
    pub fn new(visible_lines: usize, visible_columns: usize) -> Self {
        Self {
            top_line: 0,
            left_column: 0,
            visible_lines,
            visible_columns,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(25, 80)
    }
}

/// Editor state - view-specific state for editing the document
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    pub cursor: Cursor,
    pub viewport: Viewport,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor state with specific viewport dimensions
    pub fn with_viewport(visible_lines: usize, visible_columns: usize) -> Self {
        Self {
            cursor: Cursor::new(),
            viewport: Viewport::new(visible_lines, visible_columns),
        }
    }

    /// Put the cursor back at the top of a freshly loaded buffer
    pub fn reset(&mut self) {
        self.cursor = Cursor::new();
        self.viewport.top_line = 0;
        self.viewport.left_column = 0;
    }

    /// Update viewport dimensions (e.g., on window resize)
    pub fn resize_viewport(&mut self, visible_lines: usize, visible_columns: usize) {
        self.viewport.visible_lines = visible_lines;
        self.viewport.visible_columns = visible_columns;
    }

    /// Scroll just enough to bring the cursor into view
    pub fn ensure_cursor_visible(&mut self, document: &Document) {
        let total_lines = document.line_count();
        let visible_lines = self.viewport.visible_lines;

        if total_lines > visible_lines && visible_lines > 0 {
            let max_top = total_lines - visible_lines;
            let line = self.cursor.line;
            if line < self.viewport.top_line {
                self.viewport.top_line = line;
            } else if line >= self.viewport.top_line + visible_lines {
                self.viewport.top_line = line + 1 - visible_lines;
            }
            self.viewport.top_line = self.viewport.top_line.min(max_top);
        } else {
            self.viewport.top_line = 0;
        }

        const HORIZONTAL_MARGIN: usize = 4;
        let column = self.cursor.column;
        let left_safe = self.viewport.left_column.saturating_add(HORIZONTAL_MARGIN);
        let right_safe = self
            .viewport
            .left_column
            .saturating_add(self.viewport.visible_columns)
            .saturating_sub(HORIZONTAL_MARGIN);

        if column < left_safe {
            self.viewport.left_column = column.saturating_sub(HORIZONTAL_MARGIN);
        } else if column >= right_safe {
            self.viewport.left_column = column
                .saturating_add(HORIZONTAL_MARGIN)
                .saturating_add(1)
                .saturating_sub(self.viewport.visible_columns);
        }
    }

    /// Move the cursor to a buffer char offset
    pub fn set_cursor_from_offset(&mut self, document: &Document, offset: usize) {
        let (line, column) = document.offset_to_cursor(offset);
        self.cursor = Cursor::at(line, column);
    }

    /// Buffer char offset of the cursor
    pub fn cursor_offset(&self, document: &Document) -> usize {
        document.cursor_to_offset(self.cursor.line, self.cursor.column)
    }

    /// Keep the cursor inside the document after an external change
    pub fn clamp_to(&mut self, document: &Document) {
        let last_line = document.line_count().saturating_sub(1);
        self.cursor.line = self.cursor.line.min(last_line);
        self.cursor.column = self.cursor.column.min(document.line_length(self.cursor.line));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_down_follows_cursor() {
        let text: String = (0..100).map(|i| format!("line {}\n", i)).collect();
        let doc = Document::with_text(&text);
        let mut editor = EditorState::with_viewport(10, 40);

        editor.cursor = Cursor::at(50, 0);
        editor.ensure_cursor_visible(&doc);
        assert_eq!(editor.viewport.top_line, 41);

        editor.cursor = Cursor::at(3, 0);
        editor.ensure_cursor_visible(&doc);
        assert_eq!(editor.viewport.top_line, 3);
    }

    #[test]
    fn test_short_document_never_scrolls() {
        let doc = Document::with_text("a\nb\n");
        let mut editor = EditorState::with_viewport(10, 40);
        editor.viewport.top_line = 5;
        editor.ensure_cursor_visible(&doc);
        assert_eq!(editor.viewport.top_line, 0);
    }

    #[test]
    fn test_horizontal_scroll() {
        let doc = Document::with_text(&"x".repeat(200));
        let mut editor = EditorState::with_viewport(10, 40);
        editor.cursor = Cursor::at(0, 100);
        editor.ensure_cursor_visible(&doc);
        assert!(editor.viewport.left_column > 0);
        assert!(editor.cursor.column < editor.viewport.left_column + 40);
    }

    #[test]
    fn test_clamp_to() {
        let doc = Document::with_text("ab\ncd");
        let mut editor = EditorState::new();
        editor.cursor = Cursor::at(9, 9);
        editor.clamp_to(&doc);
        assert_eq!(editor.cursor, Cursor::at(1, 2));
    }
}
