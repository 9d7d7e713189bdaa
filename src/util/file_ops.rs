//! File and folder creation for the New File / New Folder actions

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{EditorError, Result};

/// `<name>.<extension>`, or just `<name>` when the extension is empty.
///
/// A single leading dot on the extension is dropped so ".py" and "py" give
/// the same name.
pub fn new_file_name(name: &str, extension: &str) -> String {
    let extension = extension.strip_prefix('.').unwrap_or(extension);
    if extension.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", name, extension)
    }
}

/// Initial content of a new file; only Python files get a seed line
pub fn seed_content(name: &str, extension: &str) -> String {
    let extension = extension.strip_prefix('.').unwrap_or(extension);
    if extension == "py" {
        format!("# Starting development with {}.py", name)
    } else {
        String::new()
    }
}

/// Reject names that would escape the chosen directory
fn check_entry_name(dir: &Path, name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains(std::path::MAIN_SEPARATOR);
    if invalid {
        return Err(EditorError::io(
            &dir.join(name),
            io::Error::new(io::ErrorKind::InvalidInput, "invalid file name"),
        ));
    }
    Ok(())
}

/// Create `<dir>/<name>.<extension>` with its seed content.
///
/// An existing file is never overwritten.
pub fn create_new_file(dir: &Path, name: &str, extension: &str) -> Result<PathBuf> {
    let file_name = new_file_name(name, extension);
    check_entry_name(dir, &file_name)?;
    let path = dir.join(&file_name);

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|e| EditorError::io(&path, e))?;
    let content = seed_content(name, extension);
    file.write_all(content.as_bytes())
        .map_err(|e| EditorError::io(&path, e))?;

    tracing::info!("Created file {}", path.display());
    Ok(path)
}

/// Create the directory `<parent>/<name>`; fails if it already exists
pub fn create_folder(parent: &Path, name: &str) -> Result<PathBuf> {
    check_entry_name(parent, name)?;
    let path = parent.join(name);
    fs::create_dir(&path).map_err(|e| EditorError::io(&path, e))?;
    tracing::info!("Created folder {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_names() {
        assert_eq!(new_file_name("main", "py"), "main.py");
        assert_eq!(new_file_name("main", ".py"), "main.py");
        assert_eq!(new_file_name("Makefile", ""), "Makefile");
    }

    #[test]
    fn test_seed_only_for_python() {
        assert_eq!(seed_content("app", "py"), "# Starting development with app.py");
        assert_eq!(seed_content("notes", "txt"), "");
        assert_eq!(seed_content("notes", "PY"), "");
    }

    #[test]
    fn test_create_new_file_refuses_to_clobber() {
        let dir = TempDir::new().unwrap();
        let path = create_new_file(dir.path(), "app", "py").unwrap();
        fs::write(&path, "print('keep me')").unwrap();

        let err = create_new_file(dir.path(), "app", "py").unwrap_err();
        assert!(matches!(err, EditorError::Io { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "print('keep me')");
    }

    #[test]
    fn test_rejects_path_separators() {
        let dir = TempDir::new().unwrap();
        assert!(create_new_file(dir.path(), "../escape", "py").is_err());
        assert!(create_folder(dir.path(), "..").is_err());
        assert!(create_folder(dir.path(), "").is_err());
    }

    #[test]
    fn test_create_folder() {
        let dir = TempDir::new().unwrap();
        let path = create_folder(dir.path(), "pkg").unwrap();
        assert!(path.is_dir());
        assert!(create_folder(dir.path(), "pkg").is_err());
    }
}
