//! Editor-invoked entry points

use crate::client::TransferClient;
use crate::editor::Editor;
use crate::transport::Transport;
use common::utils::normalize_line_endings;
use log::{error, warn};
use std::path::Path;

/// Download the configured file into the active buffer.
///
/// Settings are read from `settings_dir` on every call. Returns true only
/// when the buffer was replaced; every failure is logged and leaves the
/// buffer untouched.
pub fn download_command<E, T>(editor: &mut E, settings_dir: &Path, transport: &T) -> bool
where
    E: Editor + ?Sized,
    T: Transport,
{
    let client = match TransferClient::new(editor.active_path(), settings_dir, transport) {
        Ok(client) => client,
        Err(e) => {
            error!("Download failed: {}", e);
            return false;
        }
    };

    let bytes = match client.download() {
        Some(bytes) if !bytes.is_empty() => bytes,
        Some(_) => {
            warn!("Downloaded file is empty, buffer left unchanged");
            return false;
        }
        None => return false,
    };

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            error!("Downloaded file is not valid UTF-8: {}", e);
            return false;
        }
    };

    match editor.replace_buffer_contents(&normalize_line_endings(&text)) {
        Ok(()) => true,
        Err(e) => {
            error!("{}", e);
            false
        }
    }
}

/// Upload the active document. Never touches the buffer.
pub fn upload_command<E, T>(editor: &E, settings_dir: &Path, transport: &T) -> bool
where
    E: Editor + ?Sized,
    T: Transport,
{
    match TransferClient::new(editor.active_path(), settings_dir, transport) {
        Ok(client) => client.upload(),
        Err(e) => {
            error!("Upload failed: {}", e);
            false
        }
    }
}
