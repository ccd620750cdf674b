//! Wire models for the upload-broker API.
//!
//! All request/response bodies use camelCase field names; timestamps are
//! RFC 3339 strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Content type assumed when the caller does not declare one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Request to generate a presigned URL for a direct upload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlRequest {
    /// Object key the client intends to upload to
    #[serde(default)]
    pub filename: String,
    /// Declared MIME type; bound into the signed URL
    #[serde(default)]
    pub content_type: Option<String>,
}

/// Response containing the presigned upload URL
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlResponse {
    pub url: String,
    pub filename: String,
}

/// One stored object with a time-limited download URL
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub name: String,
    pub url: String,
    pub size: i64,
    pub last_modified: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct FilesResponse {
    pub files: Vec<FileEntry>,
}

/// Request to record upload metadata without issuing a URL
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveFileInfoRequest {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub content_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFileRequest {
    #[serde(default)]
    pub filename: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Root payload: identifies the service and its storage target
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub status: String,
    pub bucket: String,
    pub region: String,
}
