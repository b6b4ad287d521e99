//! HTTP seam between the transfer client and the network

use crate::constants::{DOWNLOAD_URL, UPLOAD_URL};
use crate::error::TransferError;
use log::debug;
use reqwest::blocking::{Body, Client};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use std::fs::File;
use std::time::Duration;

/// Endpoint URLs used by the transfer client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub download: String,
    pub upload: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            download: DOWNLOAD_URL.to_string(),
            upload: UPLOAD_URL.to_string(),
        }
    }
}

/// Request body. The file handle is owned here and closed when the payload is dropped.
#[derive(Debug)]
pub enum Payload {
    Empty,
    File { file: File, len: u64 },
}

/// A single POST request
#[derive(Debug)]
pub struct ApiRequest {
    pub url: String,
    pub headers: HeaderMap,
    pub payload: Payload,
}

/// Status and raw body of a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Sends one request and waits for the complete response
pub trait Transport {
    fn send(&self, request: ApiRequest) -> Result<Reply, TransferError>;
}

impl Transport for Client {
    fn send(&self, request: ApiRequest) -> Result<Reply, TransferError> {
        let ApiRequest {
            url,
            headers,
            payload,
        } = request;

        let mut builder = self.post(&url).headers(headers);
        if let Payload::File { file, len } = payload {
            builder = builder.body(Body::sized(file, len));
        }

        debug!("POST {}", url);
        let response = builder.send()?;
        let status = response.status();
        let body = response.bytes()?.to_vec();
        debug!("{} returned {} ({} bytes)", url, status, body.len());

        Ok(Reply { status, body })
    }
}

/// Build the production HTTP client. No request timeout is set, so an
/// unresponsive endpoint blocks the caller.
pub fn http_client() -> Result<Client, TransferError> {
    Ok(Client::builder().timeout(None::<Duration>).build()?)
}
