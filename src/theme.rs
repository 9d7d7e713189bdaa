//! Theme system for the editor
//!
//! Provides YAML-based theming support with compile-time embedded themes
//! and user-defined themes from the config directory.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/albert-code/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::syntax::{highlight_id_for_name, HighlightId, HIGHLIGHT_NAMES};

// Embed theme YAML files at compile time
pub const DEFAULT_DARK_YAML: &str = include_str!("../themes/dark.yaml");
pub const DEFAULT_LIGHT_YAML: &str = include_str!("../themes/light.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "default-dark")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "default-dark",
        yaml: DEFAULT_DARK_YAML,
    },
    BuiltinTheme {
        id: "default-light",
        yaml: DEFAULT_LIGHT_YAML,
    },
];

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// RGB color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional)
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        if s.len() != 6 || !s.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&s[range], 16).map_err(|e| e.to_string())
        };
        Ok(Color {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub ui: UiThemeData,
    /// Style name → hex color
    #[serde(default)]
    pub syntax: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiThemeData {
    pub window: WindowThemeData,
    pub editor: EditorThemeData,
    pub sidebar: SidebarThemeData,
    pub info_bar: InfoBarThemeData,
    pub overlay: OverlayThemeData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindowThemeData {
    pub background: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditorThemeData {
    pub background: String,
    pub foreground: String,
    pub current_line_background: String,
    pub cursor_color: String,
    pub line_number: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SidebarThemeData {
    pub background: String,
    pub foreground: String,
    pub selection_background: String,
    pub button_background: String,
    pub button_foreground: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InfoBarThemeData {
    pub background: String,
    pub foreground: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverlayThemeData {
    pub background: String,
    pub foreground: String,
    pub border: String,
    pub input_background: String,
    pub error: String,
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub window_background: Color,
    pub editor: EditorTheme,
    pub sidebar: SidebarTheme,
    pub info_bar: InfoBarTheme,
    pub overlay: OverlayTheme,
    /// Indexed by HighlightId; `None` means "use the editor foreground"
    pub syntax: Vec<Option<Color>>,
}

#[derive(Debug, Clone)]
pub struct EditorTheme {
    pub background: Color,
    pub foreground: Color,
    pub current_line_background: Color,
    pub cursor_color: Color,
    pub line_number: Color,
}

#[derive(Debug, Clone)]
pub struct SidebarTheme {
    pub background: Color,
    pub foreground: Color,
    pub selection_background: Color,
    pub button_background: Color,
    pub button_foreground: Color,
}

#[derive(Debug, Clone)]
pub struct InfoBarTheme {
    pub background: Color,
    pub foreground: Color,
}

#[derive(Debug, Clone)]
pub struct OverlayTheme {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub input_background: Color,
    pub error: Color,
}

impl Theme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        Theme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        let ui = &data.ui;

        let mut syntax = vec![None; HIGHLIGHT_NAMES.len()];
        for (name, hex) in &data.syntax {
            match highlight_id_for_name(name) {
                Some(id) => syntax[id as usize] = Some(Color::from_hex(hex)?),
                None => tracing::debug!("Theme {}: unknown syntax style {}", data.name, name),
            }
        }

        Ok(Theme {
            name: data.name.clone(),
            window_background: Color::from_hex(&ui.window.background)?,
            editor: EditorTheme {
                background: Color::from_hex(&ui.editor.background)?,
                foreground: Color::from_hex(&ui.editor.foreground)?,
                current_line_background: Color::from_hex(&ui.editor.current_line_background)?,
                cursor_color: Color::from_hex(&ui.editor.cursor_color)?,
                line_number: Color::from_hex(&ui.editor.line_number)?,
            },
            sidebar: SidebarTheme {
                background: Color::from_hex(&ui.sidebar.background)?,
                foreground: Color::from_hex(&ui.sidebar.foreground)?,
                selection_background: Color::from_hex(&ui.sidebar.selection_background)?,
                button_background: Color::from_hex(&ui.sidebar.button_background)?,
                button_foreground: Color::from_hex(&ui.sidebar.button_foreground)?,
            },
            info_bar: InfoBarTheme {
                background: Color::from_hex(&ui.info_bar.background)?,
                foreground: Color::from_hex(&ui.info_bar.foreground)?,
            },
            overlay: OverlayTheme {
                background: Color::from_hex(&ui.overlay.background)?,
                foreground: Color::from_hex(&ui.overlay.foreground)?,
                border: Color::from_hex(&ui.overlay.border)?,
                input_background: Color::from_hex(&ui.overlay.input_background)?,
                error: Color::from_hex(&ui.overlay.error)?,
            },
            syntax,
        })
    }

    /// Color for a highlight, falling back to the editor foreground
    pub fn highlight_color(&self, id: HighlightId) -> Color {
        self.syntax
            .get(id as usize)
            .copied()
            .flatten()
            .unwrap_or(self.editor.foreground)
    }

    /// Default dark theme (YAML-backed with Rust fallback)
    pub fn default_dark() -> Self {
        match Theme::from_yaml(DEFAULT_DARK_YAML) {
            Ok(theme) => theme,
            Err(e) => {
                tracing::error!("Embedded dark theme is invalid: {}", e);
                Theme {
                    name: "Albert Dark".to_string(),
                    window_background: Color::rgb(0x2B, 0x2B, 0x2B),
                    editor: EditorTheme {
                        background: Color::rgb(0x1E, 0x1E, 0x1E),
                        foreground: Color::rgb(0xDC, 0xDC, 0xDC),
                        current_line_background: Color::rgb(0x2A, 0x2A, 0x2A),
                        cursor_color: Color::rgb(0xFF, 0xFF, 0xFF),
                        line_number: Color::rgb(0x85, 0x85, 0x85),
                    },
                    sidebar: SidebarTheme {
                        background: Color::rgb(0x1E, 0x1E, 0x1E),
                        foreground: Color::rgb(0xDC, 0xDC, 0xDC),
                        selection_background: Color::rgb(0x26, 0x4F, 0x78),
                        button_background: Color::rgb(0x52, 0x71, 0xFF),
                        button_foreground: Color::rgb(0xFF, 0xFF, 0xFF),
                    },
                    info_bar: InfoBarTheme {
                        background: Color::rgb(0x2B, 0x2B, 0x2B),
                        foreground: Color::rgb(0x3C, 0xB3, 0x71),
                    },
                    overlay: OverlayTheme {
                        background: Color::rgb(0x2B, 0x2D, 0x30),
                        foreground: Color::rgb(0xE0, 0xE0, 0xE0),
                        border: Color::rgb(0x52, 0x71, 0xFF),
                        input_background: Color::rgb(0x1E, 0x1E, 0x1E),
                        error: Color::rgb(0xFF, 0x80, 0x80),
                    },
                    syntax: vec![Some(Color::rgb(0x56, 0x9C, 0xD6))],
                }
            }
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}
