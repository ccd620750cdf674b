//! Request handlers for the upload-broker HTTP surface.

mod delete;
mod file_info;
mod files;
mod health;
mod upload_url;

pub use delete::delete_file;
pub use file_info::save_file_info;
pub use files::list_files;
pub use health::{health_check, service_info};
pub use upload_url::generate_upload_url;

use std::time::Duration;

/// Bound on metadata-store calls. A hung insert is absorbed like any other
/// recorder failure; it must never stall the surrounding request.
pub(crate) const RECORD_TIMEOUT: Duration = Duration::from_secs(5);
