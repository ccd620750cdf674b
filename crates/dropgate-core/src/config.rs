//! Configuration module
//!
//! Application configuration is read from the environment once at startup and
//! kept immutable afterwards. Handlers receive it through shared state; there
//! are no ambient configuration globals.

use std::env;

// Defaults matching the deployed service
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_AWS_REGION: &str = "ap-south-1";
const DEFAULT_S3_BUCKET: &str = "dropgate-uploads";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_DB_TIMEOUT_SECS: u64 = 5;
const DEFAULT_UPLOAD_URL_TTL_SECS: u64 = 300;
const DEFAULT_DOWNLOAD_URL_TTL_SECS: u64 = 7 * 24 * 3600;
const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".gif", ".mp4", ".mov", ".avi", ".webm",
];

/// Application configuration (upload broker).
#[derive(Clone, Debug)]
pub struct Config {
    server_port: u16,
    cors_origins: Vec<String>,
    environment: String,
    aws_access_key_id: String,
    aws_secret_access_key: String,
    aws_region: String,
    s3_bucket: String,
    s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers (MinIO, DigitalOcean Spaces, etc.)
    database_url: String,
    db_max_connections: u32,
    db_timeout_seconds: u64,
    allowed_extensions: Vec<String>,
    upload_url_ttl_secs: u64,
    download_url_ttl_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let aws_access_key_id = env::var("AWS_ACCESS_KEY_ID").map_err(|_| {
            anyhow::anyhow!("Missing AWS credentials: AWS_ACCESS_KEY_ID must be set")
        })?;
        let aws_secret_access_key = env::var("AWS_SECRET_ACCESS_KEY").map_err(|_| {
            anyhow::anyhow!("Missing AWS credentials: AWS_SECRET_ACCESS_KEY must be set")
        })?;

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let allowed_extensions = env::var("ALLOWED_EXTENSIONS")
            .map(|s| parse_extensions(&s))
            .unwrap_or_else(|_| {
                DEFAULT_ALLOWED_EXTENSIONS
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            });

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
            let user = env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string());
            let password = env::var("DB_PASSWORD").unwrap_or_default();
            let name = env::var("DB_NAME").unwrap_or_else(|_| "file_uploads".to_string());
            format!("postgres://{}:{}@{}:{}/{}", user, password, host, port, name)
        });

        let config = Config {
            server_port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            cors_origins,
            environment,
            aws_access_key_id,
            aws_secret_access_key,
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| DEFAULT_AWS_REGION.to_string()),
            s3_bucket: env::var("S3_BUCKET").unwrap_or_else(|_| DEFAULT_S3_BUCKET.to_string()),
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            database_url,
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS),
            db_timeout_seconds: env::var("DB_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_DB_TIMEOUT_SECS),
            allowed_extensions,
            upload_url_ttl_secs: env::var("UPLOAD_URL_TTL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_UPLOAD_URL_TTL_SECS),
            download_url_ttl_secs: env::var("DOWNLOAD_URL_TTL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_DOWNLOAD_URL_TTL_SECS),
        };

        config.validate()?;
        Ok(config)
    }

    /// Fail-fast sanity checks, run once at startup.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.aws_access_key_id.is_empty() || self.aws_secret_access_key.is_empty() {
            anyhow::bail!("AWS credentials must not be empty");
        }
        if self.s3_bucket.is_empty() {
            anyhow::bail!("S3_BUCKET must not be empty");
        }
        if self.allowed_extensions.is_empty() {
            anyhow::bail!("ALLOWED_EXTENSIONS must contain at least one extension");
        }
        if self.upload_url_ttl_secs == 0 || self.download_url_ttl_secs == 0 {
            anyhow::bail!("URL TTLs must be greater than zero");
        }
        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn aws_access_key_id(&self) -> &str {
        &self.aws_access_key_id
    }

    pub fn aws_secret_access_key(&self) -> &str {
        &self.aws_secret_access_key
    }

    pub fn aws_region(&self) -> &str {
        &self.aws_region
    }

    pub fn s3_bucket(&self) -> &str {
        &self.s3_bucket
    }

    pub fn s3_endpoint(&self) -> Option<&str> {
        self.s3_endpoint.as_deref()
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
    }

    pub fn db_timeout_seconds(&self) -> u64 {
        self.db_timeout_seconds
    }

    pub fn allowed_extensions(&self) -> &[String] {
        &self.allowed_extensions
    }

    pub fn upload_url_ttl_secs(&self) -> u64 {
        self.upload_url_ttl_secs
    }

    pub fn download_url_ttl_secs(&self) -> u64 {
        self.download_url_ttl_secs
    }
}

/// Parse a comma-separated extension list, normalizing each entry to a
/// lowercase `.ext` suffix.
fn parse_extensions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .map(|s| {
            if s.starts_with('.') {
                s
            } else {
                format!(".{}", s)
            }
        })
        .collect()
}
