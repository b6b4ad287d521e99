use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("No file is open in the editor")]
    NoActiveFile,
    #[error("Failed to replace buffer contents: {0}")]
    Io(#[from] io::Error),
}

/// What the transfer commands need from the host editor
pub trait Editor {
    /// Path of the focused document, if it is backed by a file
    fn active_path(&self) -> Option<PathBuf>;

    /// Replace the whole buffer with `text` as a single edit, so the buffer
    /// is never observed half-replaced
    fn replace_buffer_contents(&mut self, text: &str) -> Result<(), EditorError>;
}
