//! Single-file transfer between an editor buffer and Dropbox

pub mod client;
pub mod commands;
pub mod constants;
pub mod download;
pub mod editor;
pub mod error;
pub mod transport;
pub mod upload;

pub use client::TransferClient;
pub use commands::{download_command, upload_command};
pub use editor::{Editor, EditorError};
pub use error::TransferError;
pub use transport::{http_client, ApiRequest, Endpoints, Payload, Reply, Transport};

#[cfg(test)]
pub(crate) mod test_utils;
