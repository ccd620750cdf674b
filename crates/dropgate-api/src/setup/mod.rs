//! Application setup and initialization
//!
//! Startup logic lives here rather than in main.rs: database pool, storage
//! client, state assembly, and route construction.

pub mod database;
pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::Result;
use dropgate_core::{Config, UploadValidator};
use dropgate_db::UploadRecordRepository;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    let pool = database::setup_database(&config).await?;
    let storage = storage::setup_storage(&config).await?;

    let state = Arc::new(AppState {
        storage,
        uploads: UploadRecordRepository::new(pool),
        validator: UploadValidator::new(config.allowed_extensions().to_vec()),
        config,
    });

    let router = routes::setup_routes(state.clone())?;

    Ok((state, router))
}
