//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use arbor_core::config::AppConfig;
use arbor_service::file::FileService;
use arbor_service::folder::FolderService;
use arbor_service::item::ItemService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Folder service.
    pub folder_service: Arc<FolderService>,
    /// File service.
    pub file_service: Arc<FileService>,
    /// Item (rename/move) service.
    pub item_service: Arc<ItemService>,
}
