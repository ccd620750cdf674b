//! Dropgate DB Library
//!
//! Repository access to the upload-intent audit log. The metadata store is
//! advisory: callers absorb failures so that storage-facing operations never
//! depend on its availability.

pub mod uploads;

pub use uploads::UploadRecordRepository;
