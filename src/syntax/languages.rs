//! Language identification for the info bar
//!
//! Maps file extensions to a language id. Only Python is recognised; every
//! other file is reported as "None".

use std::path::Path;

/// Supported language identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageId {
    #[default]
    PlainText,
    Python,
}

impl LanguageId {
    /// Detect language from file extension (case-sensitive, without the dot)
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "py" => LanguageId::Python,
            _ => LanguageId::PlainText,
        }
    }

    /// Detect language from file path
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(LanguageId::PlainText)
    }

    /// Get display name for the language, as shown in the info bar
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageId::PlainText => "None",
            LanguageId::Python => "Python",
        }
    }
}
