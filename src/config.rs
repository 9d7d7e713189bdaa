//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/albert-code/config.yaml`. Every
//! field has a default, so a partial file is valid.

use std::path::Path;

use serde::Deserialize;

use crate::process::ProcessRequest;

/// How path choices (open folder, save as, target directory) are made
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogMode {
    /// Native file dialogs, falling back to prompts without a desktop session
    #[default]
    Native,
    /// Always type paths into an in-window prompt
    Prompt,
}

/// A program with leading arguments; the action appends its own argument
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommandSpec {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Build the request for running this command with one extra argument
    pub fn request_with(&self, last_arg: impl Into<std::ffi::OsString>) -> ProcessRequest {
        ProcessRequest::new(self.program.clone())
            .args(self.args.iter().cloned())
            .arg(last_arg)
    }
}

#[cfg(windows)]
const DEFAULT_PYTHON: &str = "python";
#[cfg(not(windows))]
const DEFAULT_PYTHON: &str = "python3";

fn default_theme() -> String {
    "default-dark".to_string()
}

fn default_interpreter() -> CommandSpec {
    CommandSpec::new(DEFAULT_PYTHON, &[])
}

fn default_package_manager() -> CommandSpec {
    CommandSpec::new(DEFAULT_PYTHON, &["-m", "pip", "install"])
}

fn default_docs_url() -> String {
    "https://docs.python.org/3/".to_string()
}

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EditorConfig {
    /// Selected theme id
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Interpreter used by "Run Code"; the file path is appended
    #[serde(default = "default_interpreter")]
    pub interpreter: CommandSpec,

    /// Installer used by "Install Package"; the package name is appended
    #[serde(default = "default_package_manager")]
    pub package_manager: CommandSpec,

    /// Page opened by "Python Docs"
    #[serde(default = "default_docs_url")]
    pub docs_url: String,

    #[serde(default)]
    pub dialogs: DialogMode,

    /// Replaces the built-in keyword list when set
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            interpreter: default_interpreter(),
            package_manager: default_package_manager(),
            docs_url: default_docs_url(),
            dialogs: DialogMode::default(),
            keywords: None,
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    /// Keywords for the highlighter: the override if present, else the built-in table
    pub fn keyword_list(&self) -> Vec<String> {
        match &self.keywords {
            Some(words) => words.clone(),
            None => crate::syntax::PYTHON_KEYWORDS
                .iter()
                .map(|w| w.to_string())
                .collect(),
        }
    }
}
