/// Download endpoint of the Dropbox content API
pub const DOWNLOAD_URL: &str = "https://content.dropboxapi.com/2/files/download";

/// Upload endpoint of the Dropbox content API
pub const UPLOAD_URL: &str = "https://content.dropboxapi.com/2/files/upload";

/// Header carrying the JSON-encoded call arguments (lowercase for `HeaderName::from_static`)
pub const DROPBOX_API_ARG: &str = "dropbox-api-arg";

/// Content type of the upload body
pub const OCTET_STREAM: &str = "application/octet-stream";
