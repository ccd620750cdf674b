//! Storage abstraction trait
//!
//! This module defines the ObjectStore trait the upload broker works against.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("URL signing failed: {0}")]
    SignFailed(String),

    #[error("Listing failed: {0}")]
    ListFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// One object as reported by a bucket listing.
///
/// `size` and `last_modified` are set by the storage backend at write
/// completion; this service only ever reads them.
#[derive(Debug, Clone)]
pub struct ObjectSummary {
    pub key: String,
    pub size: i64,
    pub last_modified: DateTime<Utc>,
}

/// Storage abstraction trait
///
/// Implementations issue credential-scoped URLs and perform the two bucket
/// operations the broker delegates (listing and deletion). URL signing is
/// local cryptographic work against cached credentials; only *using* an
/// issued URL reaches the backend, and that happens outside this service.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Issue a time-limited URL allowing exactly one PUT of `key`.
    ///
    /// The declared content type is bound into the signature, so the backend
    /// rejects uploads that declare a different type.
    async fn presigned_put_url(
        &self,
        key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> StorageResult<String>;

    /// Issue a time-limited URL allowing exactly one GET of `key`.
    async fn presigned_get_url(&self, key: &str, expires_in: Duration) -> StorageResult<String>;

    /// List the bucket's objects. Returns a single backend page in
    /// backend-defined order.
    async fn list(&self) -> StorageResult<Vec<ObjectSummary>>;

    /// Delete an object by key. Whether deleting an unknown key errors is
    /// backend-defined (S3 treats it as a no-op).
    async fn delete(&self, key: &str) -> StorageResult<()>;
}
