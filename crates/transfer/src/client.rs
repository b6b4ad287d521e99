use crate::constants::DROPBOX_API_ARG;
use crate::error::TransferError;
use crate::transport::{Endpoints, Transport};
use common::file_utils;
use common::settings::{KEY_DROPBOX_TOKEN, KEY_FILENAME};
use common::{load_settings, Settings};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use std::path::{Path, PathBuf};

/// Bundles the active document's path with the plugin settings and
/// performs downloads and uploads of that one file
pub struct TransferClient<'a, T: Transport> {
    file_path: Option<PathBuf>,
    settings: Settings,
    transport: &'a T,
    endpoints: Endpoints,
}

impl<'a, T: Transport> TransferClient<'a, T> {
    /// Create a transfer client, reading the settings file in `settings_dir`
    pub fn new(
        file_path: Option<PathBuf>,
        settings_dir: &Path,
        transport: &'a T,
    ) -> Result<Self, TransferError> {
        let settings = load_settings(settings_dir)?;
        Ok(Self::with_settings(file_path, settings, transport))
    }

    /// Create a transfer client from already loaded settings
    pub fn with_settings(file_path: Option<PathBuf>, settings: Settings, transport: &'a T) -> Self {
        Self {
            file_path,
            settings,
            transport,
            endpoints: Endpoints::default(),
        }
    }

    /// Point the client at different endpoint URLs
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub(crate) fn transport(&self) -> &T {
        self.transport
    }

    pub(crate) fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Configured remote filename, as written in the settings
    pub fn remote_filename(&self) -> Result<&str, TransferError> {
        Ok(self.settings.require(KEY_FILENAME)?)
    }

    /// Check the active document against the configured filename.
    /// Returns the local path on success.
    pub fn check_file_name(&self) -> Result<&Path, TransferError> {
        let filename = self.remote_filename()?;
        match self.file_path() {
            Some(path) if file_utils::check_file_name(Some(path), filename) => Ok(path),
            other => Err(TransferError::IncorrectFile(
                other
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "<no file>".to_string()),
            )),
        }
    }

    /// Build the headers shared by both endpoints
    pub(crate) fn api_headers(&self, api_arg: &str) -> Result<HeaderMap, TransferError> {
        let token = self.settings.require(KEY_DROPBOX_TOKEN)?;

        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", token))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(
            HeaderName::from_static(DROPBOX_API_ARG),
            HeaderValue::from_str(api_arg)?,
        );
        Ok(headers)
    }
}
