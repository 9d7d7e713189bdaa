//! Syntax highlighting module
//!
//! Provides keyword-table highlighting with:
//! - A fixed, ordered rule list built once per editor
//! - Per-line, stateless highlighting (re-run for each visible line)
//! - Language detection from file extensions for the info bar

mod highlights;
mod languages;

pub use highlights::{
    highlight_id_for_name, HighlightId, HighlightSpan, Highlighter, KeywordRule, LineHighlights,
    HIGHLIGHT_NAMES, KEYWORD, PYTHON_KEYWORDS,
};
pub use languages::LanguageId;
