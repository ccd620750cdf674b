//! In-memory ObjectStore with per-operation failure injection.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dropgate_storage::{ObjectStore, ObjectSummary, StorageError, StorageResult};
use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;

/// One issued URL, captured for assertions.
#[derive(Debug, Clone)]
pub struct IssuedUrl {
    pub key: String,
    pub content_type: Option<String>,
    pub expires_in: Duration,
}

#[derive(Default)]
pub struct MockStore {
    /// Objects returned by `list`, in order.
    pub objects: Vec<ObjectSummary>,
    /// Keys for which URL signing fails.
    pub fail_sign_keys: HashSet<String>,
    pub fail_list: bool,
    pub fail_delete: bool,
    pub issued: Mutex<Vec<IssuedUrl>>,
    pub deleted: Mutex<Vec<String>>,
}

// Not every test binary touches every helper.
impl MockStore {
    #[allow(dead_code)]
    pub fn issued_urls(&self) -> Vec<IssuedUrl> {
        self.issued.lock().expect("issued lock").clone()
    }

    #[allow(dead_code)]
    pub fn deleted_keys(&self) -> Vec<String> {
        self.deleted.lock().expect("deleted lock").clone()
    }
}

/// Build an ObjectSummary with a fixed timestamp.
#[allow(dead_code)]
pub fn object(key: &str, size: i64) -> ObjectSummary {
    ObjectSummary {
        key: key.to_string(),
        size,
        last_modified: DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .expect("timestamp")
            .with_timezone(&Utc),
    }
}

#[async_trait]
impl ObjectStore for MockStore {
    async fn presigned_put_url(
        &self,
        key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        if self.fail_sign_keys.contains(key) {
            return Err(StorageError::SignFailed(format!(
                "signing disabled for {}",
                key
            )));
        }
        self.issued.lock().expect("issued lock").push(IssuedUrl {
            key: key.to_string(),
            content_type: Some(content_type.to_string()),
            expires_in,
        });
        Ok(format!(
            "https://test-bucket.s3.local/{}?X-Amz-Expires={}",
            key,
            expires_in.as_secs()
        ))
    }

    async fn presigned_get_url(&self, key: &str, expires_in: Duration) -> StorageResult<String> {
        if self.fail_sign_keys.contains(key) {
            return Err(StorageError::SignFailed(format!(
                "signing disabled for {}",
                key
            )));
        }
        self.issued.lock().expect("issued lock").push(IssuedUrl {
            key: key.to_string(),
            content_type: None,
            expires_in,
        });
        Ok(format!(
            "https://test-bucket.s3.local/{}?X-Amz-Expires={}",
            key,
            expires_in.as_secs()
        ))
    }

    async fn list(&self) -> StorageResult<Vec<ObjectSummary>> {
        if self.fail_list {
            return Err(StorageError::ListFailed("listing disabled".to_string()));
        }
        Ok(self.objects.clone())
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        if self.fail_delete {
            return Err(StorageError::DeleteFailed(
                "deletion disabled".to_string(),
            ));
        }
        self.deleted.lock().expect("deleted lock").push(key.to_string());
        Ok(())
    }
}
