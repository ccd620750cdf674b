use dropgate_core::AppError;
use sqlx::PgPool;

/// Repository for the upload-intent audit log
#[derive(Clone)]
pub struct UploadRecordRepository {
    pool: PgPool,
}

impl UploadRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert one row per upload-intent event.
    ///
    /// A connection is acquired from the pool for this call only and released
    /// when it completes, success or failure. Rows are insert-only: nothing
    /// updates or deletes them, and no row is required to correspond to an
    /// object that was actually written to the bucket.
    pub async fn record(&self, filename: &str, content_type: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO uploads (filename, content_type)
            VALUES ($1, $2)
            "#,
        )
        .bind(filename)
        .bind(content_type)
        .execute(&self.pool)
        .await?;

        tracing::debug!(
            filename = %filename,
            content_type = %content_type,
            "Upload metadata recorded"
        );

        Ok(())
    }

    /// Cheap reachability probe for health reporting: touches the uploads
    /// table without scanning it.
    pub async fn probe(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1 FROM uploads LIMIT 0")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
