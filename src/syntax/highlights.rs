//! Keyword highlighting
//!
//! A fixed, ordered list of keyword rules is applied to one line at a time.
//! No state is carried across lines, so multi-line constructs (strings,
//! block comments) are not recognised.

use std::sync::Arc;

use regex::Regex;

/// Style names understood by the theme. Index into this array is the HighlightId.
pub const HIGHLIGHT_NAMES: &[&str] = &[
    "keyword", // @keyword
];

/// Index into HIGHLIGHT_NAMES
pub type HighlightId = u16;

/// Style used by the built-in keyword table
pub const KEYWORD: HighlightId = 0;

/// Default keyword table, in the order the rules are applied
pub const PYTHON_KEYWORDS: &[&str] = &[
    "def", "class", "if", "elif", "else", "while", "for", "try", "except", "import", "from", "as",
    "return",
];

/// A highlighted range within a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    /// Start offset in bytes (inclusive)
    pub start: usize,
    /// Length in bytes
    pub len: usize,
    /// Index into HIGHLIGHT_NAMES
    pub highlight: HighlightId,
}

impl HighlightSpan {
    /// End offset in bytes (exclusive)
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// A literal keyword bounded by word boundaries, paired with a style
#[derive(Debug, Clone)]
pub struct KeywordRule {
    keyword: String,
    pattern: Regex,
    highlight: HighlightId,
}

impl KeywordRule {
    pub fn new(keyword: &str, highlight: HighlightId) -> Result<Self, regex::Error> {
        // ASCII word boundaries: a non-ASCII letter next to a keyword does not hide it
        let pattern = Regex::new(&format!(r"(?-u:\b){}(?-u:\b)", regex::escape(keyword)))?;
        Ok(Self {
            keyword: keyword.to_string(),
            pattern,
            highlight,
        })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn highlight(&self) -> HighlightId {
        self.highlight
    }

    fn collect_spans(&self, line: &str, spans: &mut Vec<HighlightSpan>) {
        spans.extend(self.pattern.find_iter(line).map(|m| HighlightSpan {
            start: m.start(),
            len: m.len(),
            highlight: self.highlight,
        }));
    }
}

/// Applies the keyword rule table to single lines of text.
///
/// The rule table is built once and shared read-only; cloning a
/// highlighter is cheap.
#[derive(Debug, Clone)]
pub struct Highlighter {
    rules: Arc<[KeywordRule]>,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::python()
    }
}

impl Highlighter {
    /// Build a highlighter where every keyword gets the same style.
    ///
    /// Empty keywords are skipped: a bare `\b\b` would match between every
    /// pair of word/non-word characters.
    pub fn new<I, S>(keywords: I, highlight: HighlightId) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rules: Vec<KeywordRule> = keywords
            .into_iter()
            .filter(|word| !word.as_ref().is_empty())
            .filter_map(|word| match KeywordRule::new(word.as_ref(), highlight) {
                Ok(rule) => Some(rule),
                Err(e) => {
                    tracing::warn!("Skipping keyword {:?}: {}", word.as_ref(), e);
                    None
                }
            })
            .collect();
        Self::from_rules(rules)
    }

    pub fn from_rules(rules: Vec<KeywordRule>) -> Self {
        Self {
            rules: rules.into(),
        }
    }

    /// The default Python keyword table
    pub fn python() -> Self {
        Self::new(PYTHON_KEYWORDS.iter().copied(), KEYWORD)
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Highlight one line.
    ///
    /// Spans are grouped by rule in table order, and within a rule in
    /// match order. Overlaps between rules are all reported; when painting,
    /// the later span wins.
    pub fn highlight(&self, line: &str) -> Vec<HighlightSpan> {
        let mut spans = Vec::new();
        for rule in self.rules.iter() {
            rule.collect_spans(line, &mut spans);
        }
        spans
    }

    pub fn highlight_line(&self, line: &str) -> LineHighlights {
        LineHighlights {
            spans: self.highlight(line),
        }
    }
}

/// Highlight information for a single line
#[derive(Debug, Clone, Default)]
pub struct LineHighlights {
    /// Spans in the order the rules produced them
    pub spans: Vec<HighlightSpan>,
}

impl LineHighlights {
    /// Get the highlight ID at a byte offset; the last span covering it wins
    pub fn highlight_at(&self, offset: usize) -> Option<HighlightId> {
        self.spans
            .iter()
            .rev()
            .find(|span| offset >= span.start && offset < span.end())
            .map(|span| span.highlight)
    }

    /// Split `line` into consecutive runs sharing the same highlight
    pub fn segments<'a>(&self, line: &'a str) -> Vec<(&'a str, Option<HighlightId>)> {
        let mut segments = Vec::new();
        let mut run_start = 0;
        let mut run_highlight = None;

        for (idx, _) in line.char_indices() {
            let highlight = self.highlight_at(idx);
            if idx == 0 {
                run_highlight = highlight;
                continue;
            }
            if highlight != run_highlight {
                segments.push((&line[run_start..idx], run_highlight));
                run_start = idx;
                run_highlight = highlight;
            }
        }

        if run_start < line.len() {
            segments.push((&line[run_start..], run_highlight));
        }
        segments
    }
}

/// Look up highlight ID by style name
pub fn highlight_id_for_name(name: &str) -> Option<HighlightId> {
    HIGHLIGHT_NAMES
        .iter()
        .position(|&n| n == name)
        .map(|pos| pos as HighlightId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_id_lookup() {
        assert_eq!(highlight_id_for_name("keyword"), Some(KEYWORD));
        assert_eq!(highlight_id_for_name("comment"), None);
    }

    #[test]
    fn test_empty_keywords_are_skipped() {
        let highlighter = Highlighter::new(["", "def"], KEYWORD);
        assert_eq!(highlighter.rules().len(), 1);
        assert!(highlighter.highlight("a b").is_empty());
    }

    #[test]
    fn test_keyword_is_escaped() {
        let highlighter = Highlighter::new(["a.b"], KEYWORD);
        assert!(highlighter.highlight("axb").is_empty());
        assert_eq!(highlighter.highlight("a.b").len(), 1);
    }

    #[test]
    fn test_segments_cover_line() {
        let highlighter = Highlighter::python();
        let line = "if x: return y";
        let segments = highlighter.highlight_line(line).segments(line);
        let joined: String = segments.iter().map(|(text, _)| *text).collect();
        assert_eq!(joined, line);
        assert_eq!(segments[0], ("if", Some(KEYWORD)));
        assert_eq!(segments[1], (" x: ", None));
        assert_eq!(segments[2], ("return", Some(KEYWORD)));
        assert_eq!(segments[3], (" y", None));
    }

    #[test]
    fn test_later_span_wins() {
        let line = LineHighlights {
            spans: vec![
                HighlightSpan {
                    start: 0,
                    len: 4,
                    highlight: 0,
                },
                HighlightSpan {
                    start: 2,
                    len: 2,
                    highlight: 7,
                },
            ],
        };
        assert_eq!(line.highlight_at(1), Some(0));
        assert_eq!(line.highlight_at(3), Some(7));
        assert_eq!(line.highlight_at(4), None);
    }
}
