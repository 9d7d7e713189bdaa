//! Where albert keeps its per-user files
//!
//! One folder named `albert-code` holds `config.yaml`, a `themes/` folder for
//! user theme overrides, and the rolling `logs/`. It sits in the platform's
//! config location: `$XDG_CONFIG_HOME` or `~/.config` on Unix and macOS,
//! `%APPDATA%` on Windows.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{EditorError, Result};

const APP_DIR: &str = "albert-code";

/// The platform config location, before the app folder is appended
fn platform_base() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        std::env::var_os("APPDATA").map(PathBuf::from)
    } else {
        std::env::var_os("XDG_CONFIG_HOME")
            .filter(|base| !base.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
    }
}

/// The albert folder under `base`
pub fn app_dir_in(base: &Path) -> PathBuf {
    base.join(APP_DIR)
}

pub fn config_dir() -> Option<PathBuf> {
    platform_base().map(|base| app_dir_in(&base))
}

pub fn config_file() -> Option<PathBuf> {
    Some(config_dir()?.join("config.yaml"))
}

pub fn themes_dir() -> Option<PathBuf> {
    Some(config_dir()?.join("themes"))
}

pub fn logs_dir() -> Option<PathBuf> {
    Some(config_dir()?.join("logs"))
}

/// Create the log folder if needed.
///
/// Fails when no home folder can be found or the folder cannot be created.
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let logs = logs_dir().ok_or_else(|| {
        EditorError::io(
            Path::new(APP_DIR),
            io::Error::new(io::ErrorKind::NotFound, "no home or config folder"),
        )
    })?;
    fs::create_dir_all(&logs).map_err(|e| EditorError::io(&logs, e))?;
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_live_in_one_app_folder() {
        let dir = app_dir_in(Path::new("/home/ada/.config"));
        assert_eq!(dir, PathBuf::from("/home/ada/.config/albert-code"));

        if let Some(config) = config_dir() {
            assert!(config.ends_with(APP_DIR));
            assert_eq!(config_file(), Some(config.join("config.yaml")));
            assert_eq!(themes_dir(), Some(config.join("themes")));
            assert_eq!(logs_dir(), Some(config.join("logs")));
        }
    }
}
