//! Dropgate Storage Library
//!
//! Storage abstraction for the upload broker. The service never proxies
//! object bytes: the trait covers URL issuance, listing, and deletion only.
//! Uploads and downloads happen directly between clients and the bucket via
//! presigned URLs.

pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use s3::S3ObjectStore;
pub use traits::{ObjectStore, ObjectSummary, StorageError, StorageResult};
