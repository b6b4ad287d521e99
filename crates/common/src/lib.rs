pub mod file_utils;
pub mod settings;
pub mod utils;

use serde::{Deserialize, Serialize};

pub use settings::{load_settings, Settings, SettingsError};

/// `Dropbox-API-Arg` for `/2/files/download`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DownloadArg {
    pub path: String, // Remote path as configured, leading slash kept
}

/// `Dropbox-API-Arg` for `/2/files/upload`
/// Field order is the order the fields appear in the header
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct UploadArg {
    pub path: String,
    pub mode: WriteMode,
    pub autorename: bool,
    pub mute: bool,
    pub strict_conflict: bool,
}

impl UploadArg {
    /// Overwrite the remote file without renaming or notifying
    pub fn overwrite(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            mode: WriteMode::Overwrite,
            autorename: false,
            mute: true,
            strict_conflict: false,
        }
    }
}

/// Upload write mode; only overwrite is ever sent
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    Overwrite,
}
