use crate::client::TransferClient;
use crate::error::TransferError;
use crate::transport::{ApiRequest, Payload, Reply, Transport};
use common::utils::to_header_json;
use common::DownloadArg;
use log::{error, info};

impl<T: Transport> TransferClient<'_, T> {
    /// Download the configured file.
    ///
    /// Returns the response body whenever a response arrived, even with a
    /// non-success status (which is logged as a failure). Returns `None` when
    /// the filename check, the settings or the transport failed.
    pub fn download(&self) -> Option<Vec<u8>> {
        match self.try_download() {
            Ok(reply) => {
                if reply.status.is_success() {
                    info!("Downloaded file {}", self.remote_filename().unwrap_or_default());
                } else {
                    error!("Download failed: {}", reply.status);
                }
                Some(reply.body)
            }
            Err(e @ TransferError::IncorrectFile(_)) => {
                error!("{}", e);
                None
            }
            Err(e) => {
                error!("Download failed: {}", e);
                None
            }
        }
    }

    /// Issue the download request without collapsing the outcome
    pub fn try_download(&self) -> Result<Reply, TransferError> {
        self.check_file_name()?;

        let arg = DownloadArg {
            path: self.remote_filename()?.to_string(),
        };
        let headers = self.api_headers(&to_header_json(&arg)?)?;

        self.transport().send(ApiRequest {
            url: self.endpoints().download.clone(),
            headers,
            payload: Payload::Empty,
        })
    }
}
