//! File properties shown from the tree context menu

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};

use crate::error::{EditorError, Result};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Path, size and timestamps of a file or directory
#[derive(Debug, Clone)]
pub struct FileProperties {
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
    /// `None` where the platform or filesystem does not record it
    pub created: Option<DateTime<Local>>,
    pub modified: Option<DateTime<Local>>,
}

fn local_time(time: std::io::Result<SystemTime>) -> Option<DateTime<Local>> {
    time.ok().map(DateTime::<Local>::from)
}

impl FileProperties {
    /// Stat `path`, following symlinks
    pub fn read(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path).map_err(|e| EditorError::io(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            size: metadata.len(),
            created: local_time(metadata.created()),
            modified: local_time(metadata.modified()),
        })
    }

    /// Message box body, one property per line
    pub fn describe(&self) -> String {
        let stamp = |time: &Option<DateTime<Local>>| {
            time.map(|t| t.format(TIMESTAMP_FORMAT).to_string())
                .unwrap_or_else(|| "unavailable".to_string())
        };
        format!(
            "Path: {}\nSize: {} bytes\nCreated: {}\nModified: {}",
            self.path.display(),
            self.size,
            stamp(&self.created),
            stamp(&self.modified)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.py");
        fs::write(&path, "12345").unwrap();

        let props = FileProperties::read(&path).unwrap();
        assert_eq!(props.size, 5);
        assert!(props.modified.is_some());

        let text = props.describe();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], format!("Path: {}", path.display()));
        assert_eq!(lines[1], "Size: 5 bytes");
        assert!(lines[2].starts_with("Created: "));
        assert!(lines[3].starts_with("Modified: "));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileProperties::read(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, EditorError::Io { .. }));
    }
}
