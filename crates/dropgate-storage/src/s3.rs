use crate::traits::{ObjectStore, ObjectSummary, StorageError, StorageResult};
use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::retry::RetryConfig;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// S3-backed ObjectStore implementation
#[derive(Clone)]
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
}

impl S3ObjectStore {
    /// Create a new S3ObjectStore instance
    ///
    /// # Arguments
    /// * `bucket` - S3 bucket name
    /// * `region` - AWS region (or region identifier for S3-compatible providers)
    /// * `access_key_id` / `secret_access_key` - static credentials used for signing
    /// * `endpoint_url` - Optional custom endpoint URL for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO)
    pub async fn new(
        bucket: String,
        region: String,
        access_key_id: &str,
        secret_access_key: &str,
        endpoint_url: Option<String>,
    ) -> StorageResult<Self> {
        if bucket.is_empty() {
            return Err(StorageError::ConfigError(
                "bucket name must not be empty".to_string(),
            ));
        }

        let region_provider = RegionProviderChain::first_try(aws_config::Region::new(region));

        let credentials = Credentials::new(
            access_key_id,
            secret_access_key,
            None,
            None,
            "dropgate-config",
        );

        // Every backend call is attempted exactly once; callers surface
        // failures rather than masking them behind SDK retries.
        let retry_config = RetryConfig::disabled();

        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(region_provider)
            .credentials_provider(credentials)
            .retry_config(retry_config.clone())
            .load()
            .await;

        // Configure the client with a custom endpoint if provided (for S3-compatible providers)
        let client = if let Some(ref endpoint) = endpoint_url {
            let mut s3_config_builder = aws_sdk_s3::Config::builder()
                .endpoint_url(endpoint)
                .region(config.region().cloned())
                .retry_config(retry_config);
            if let Some(provider) = config.credentials_provider() {
                s3_config_builder = s3_config_builder.credentials_provider(provider);
            }
            // Path-style addressing is required by MinIO and most S3-compatible providers
            s3_config_builder = s3_config_builder.force_path_style(true);

            Client::from_conf(s3_config_builder.build())
        } else {
            Client::new(&config)
        };

        Ok(S3ObjectStore { client, bucket })
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn presigned_put_url(
        &self,
        key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        let presigning_config = PresigningConfig::builder()
            .expires_in(expires_in)
            .build()
            .map_err(|e| StorageError::SignFailed(e.to_string()))?;

        let presigned_request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .presigned(presigning_config)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    key = %key,
                    "S3 presigned PUT signing failed"
                );
                StorageError::SignFailed(e.to_string())
            })?;

        Ok(presigned_request.uri().to_string())
    }

    async fn presigned_get_url(&self, key: &str, expires_in: Duration) -> StorageResult<String> {
        let presigning_config = PresigningConfig::builder()
            .expires_in(expires_in)
            .build()
            .map_err(|e| StorageError::SignFailed(e.to_string()))?;

        let presigned_request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning_config)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    key = %key,
                    "S3 presigned GET signing failed"
                );
                StorageError::SignFailed(e.to_string())
            })?;

        Ok(presigned_request.uri().to_string())
    }

    async fn list(&self) -> StorageResult<Vec<ObjectSummary>> {
        let start = std::time::Instant::now();

        let response = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 list failed"
                );
                StorageError::ListFailed(e.to_string())
            })?;

        if response.is_truncated().unwrap_or(false) {
            tracing::warn!(
                bucket = %self.bucket,
                "Object listing truncated; serving first page only"
            );
        }

        let objects: Vec<ObjectSummary> = response
            .contents()
            .iter()
            .filter_map(|obj| {
                let key = obj.key()?.to_string();
                let last_modified = obj
                    .last_modified()
                    .and_then(|t| DateTime::from_timestamp(t.secs(), t.subsec_nanos()))
                    .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
                Some(ObjectSummary {
                    key,
                    size: obj.size().unwrap_or(0),
                    last_modified,
                })
            })
            .collect();

        tracing::info!(
            bucket = %self.bucket,
            count = objects.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 list successful"
        );

        Ok(objects)
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        let start = std::time::Instant::now();

        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    key = %key,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 delete failed"
                );
                StorageError::DeleteFailed(e.to_string())
            })?;

        tracing::info!(
            bucket = %self.bucket,
            key = %key,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 delete successful"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_store() -> S3ObjectStore {
        S3ObjectStore::new(
            "test-bucket".to_string(),
            "us-east-1".to_string(),
            "AKIDEXAMPLE",
            "test-secret",
            None,
        )
        .await
        .expect("store")
    }

    // Presigning is local SigV4 work; no network involved.

    #[tokio::test]
    async fn test_presigned_put_url_is_scoped_and_bounded() {
        let store = test_store().await;
        let url = store
            .presigned_put_url("photo.jpg", "image/jpeg", Duration::from_secs(300))
            .await
            .expect("presign");

        assert!(url.contains("photo.jpg"));
        assert!(url.contains("X-Amz-Signature="));
        assert!(url.contains("X-Amz-Expires=300"));
        // The declared content type is part of the signed headers.
        assert!(url.to_lowercase().contains("content-type"));
    }

    #[tokio::test]
    async fn test_presigned_get_url_expiry() {
        let store = test_store().await;
        let url = store
            .presigned_get_url("photo.jpg", Duration::from_secs(604800))
            .await
            .expect("presign");

        assert!(url.contains("photo.jpg"));
        assert!(url.contains("X-Amz-Expires=604800"));
    }

    #[tokio::test]
    async fn test_empty_bucket_name_rejected() {
        let result = S3ObjectStore::new(
            String::new(),
            "us-east-1".to_string(),
            "AKIDEXAMPLE",
            "test-secret",
            None,
        )
        .await;
        assert!(matches!(result, Err(StorageError::ConfigError(_))));
    }
}
