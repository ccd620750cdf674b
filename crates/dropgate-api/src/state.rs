//! Application state.
//!
//! Built once at startup and shared with every handler through
//! `Arc<AppState>`; all fields are immutable after construction.

use dropgate_core::{Config, UploadValidator};
use dropgate_db::UploadRecordRepository;
use dropgate_storage::ObjectStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn ObjectStore>,
    pub uploads: UploadRecordRepository,
    pub validator: UploadValidator,
    pub config: Config,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
