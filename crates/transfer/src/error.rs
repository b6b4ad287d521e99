use common::SettingsError;
use reqwest::header::InvalidHeaderValue;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransferError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("Incorrect file - {0}")]
    IncorrectFile(String),
    #[error("Failed to open {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Failure reported by a `Transport` other than the reqwest client,
    /// which reports through `Http`
    #[error("Connection failed: {0}")]
    Connection(#[source] io::Error),
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
    #[error("Failed to encode API argument: {0}")]
    Json(#[from] serde_json::Error),
}
