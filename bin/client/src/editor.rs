//! File-backed editor used when running outside a host editor

use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use transfer::{Editor, EditorError};

/// Treats a file on disk as the active document
pub struct FileEditor {
    path: Option<PathBuf>,
}

impl FileEditor {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl Editor for FileEditor {
    fn active_path(&self) -> Option<PathBuf> {
        self.path.clone()
    }

    /// Write to a temp file in the same directory, then rename it over the
    /// document, so readers see either the old or the new contents
    fn replace_buffer_contents(&mut self, text: &str) -> Result<(), EditorError> {
        let path = self.path.as_deref().ok_or(EditorError::NoActiveFile)?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(text.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_replace_overwrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "old\r\ncontents").unwrap();

        let mut editor = FileEditor::new(Some(path.clone()));
        editor.replace_buffer_contents("new\ncontents").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\ncontents");
        // No temp files left behind
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_replace_without_file() {
        let mut editor = FileEditor::new(None);
        assert!(matches!(
            editor.replace_buffer_contents("text"),
            Err(EditorError::NoActiveFile)
        ));
    }
}
