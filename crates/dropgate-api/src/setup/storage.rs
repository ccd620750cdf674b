//! Storage setup and initialization

use anyhow::{Context, Result};
use dropgate_core::Config;
use dropgate_storage::{ObjectStore, S3ObjectStore};
use std::sync::Arc;

/// Build the S3 client once at startup; credentials, bucket, and region are
/// immutable afterwards.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn ObjectStore>> {
    let store = S3ObjectStore::new(
        config.s3_bucket().to_string(),
        config.aws_region().to_string(),
        config.aws_access_key_id(),
        config.aws_secret_access_key(),
        config.s3_endpoint().map(String::from),
    )
    .await
    .context("Failed to initialize storage client")?;

    tracing::info!(
        bucket = %config.s3_bucket(),
        region = %config.aws_region(),
        "Storage client initialized"
    );

    Ok(Arc::new(store))
}
