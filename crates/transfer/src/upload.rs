use crate::client::TransferClient;
use crate::constants::OCTET_STREAM;
use crate::error::TransferError;
use crate::transport::{ApiRequest, Payload, Reply, Transport};
use common::utils::to_header_json;
use common::UploadArg;
use log::{error, info};
use reqwest::header::{HeaderValue, CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::StatusCode;
use std::fs::File;

impl<T: Transport> TransferClient<'_, T> {
    /// Upload the active document, overwriting the remote file.
    ///
    /// Returns `true` whenever a response arrived. Only status 200 is logged
    /// as success, but other statuses still return `true`; callers wanting
    /// the status should use [`TransferClient::try_upload`].
    pub fn upload(&self) -> bool {
        match self.try_upload() {
            Ok(reply) => {
                if reply.status == StatusCode::OK {
                    info!("Uploaded file {}", self.remote_filename().unwrap_or_default());
                } else {
                    error!("Upload failed: {}", reply.status);
                }
                true
            }
            Err(e @ TransferError::IncorrectFile(_)) => {
                error!("{}", e);
                false
            }
            Err(e) => {
                error!("Upload failed: {}", e);
                false
            }
        }
    }

    /// Issue the upload request without collapsing the outcome
    pub fn try_upload(&self) -> Result<Reply, TransferError> {
        let path = self.check_file_name()?;

        let arg = UploadArg::overwrite(self.remote_filename()?);
        let mut headers = self.api_headers(&to_header_json(&arg)?)?;
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(OCTET_STREAM));

        let io_error = |source: std::io::Error| TransferError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(io_error)?;
        let len = file.metadata().map_err(io_error)?.len();
        headers.insert(CONTENT_LENGTH, HeaderValue::from(len));

        // The payload owns the handle; it is closed once the request is done
        self.transport().send(ApiRequest {
            url: self.endpoints().upload.clone(),
            headers,
            payload: Payload::File { file, len },
        })
    }
}
