//! File read, create, update, and delete operations.

use std::sync::Arc;

use tracing::{debug, info};

use arbor_core::error::AppError;
use arbor_core::result::AppResult;
use arbor_core::types::{FileId, FolderId};
use arbor_database::repositories::file::FileRepository;
use arbor_entity::file::{File, NewFile};

/// Manages file CRUD operations.
#[derive(Debug, Clone)]
pub struct FileService {
    /// File repository.
    file_repo: Arc<FileRepository>,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(file_repo: Arc<FileRepository>) -> Self {
        Self { file_repo }
    }

    /// Gets a file by ID.
    ///
    /// A missing file yields `None`, not a failure; callers verifying a
    /// deletion rely on this.
    pub async fn get_file(&self, file_id: FileId) -> AppResult<Option<File>> {
        let file = self.file_repo.find_by_id(file_id).await?;
        debug!(file_id = %file_id, found = file.is_some(), "Fetched file");
        Ok(file)
    }

    /// Creates a new file under a parent folder. Files cannot be roots, so
    /// the parent is mandatory.
    pub async fn create_file(
        &self,
        title: &str,
        parent_id: FolderId,
        content: String,
    ) -> AppResult<File> {
        if title.trim().is_empty() {
            return Err(AppError::invalid_argument("File title cannot be empty"));
        }
        if title.chars().count() > 255 {
            return Err(AppError::invalid_argument(
                "File title cannot exceed 255 characters",
            ));
        }

        let file = self
            .file_repo
            .create(&NewFile {
                title: title.to_string(),
                parent_id,
                content,
            })
            .await?;

        info!(file_id = %file.id, parent_id = %parent_id, "File created");
        Ok(file)
    }

    /// Replaces a file's content; `updated_at` is refreshed by the store.
    pub async fn update_file_content(&self, file_id: FileId, content: &str) -> AppResult<File> {
        let file = self.file_repo.update_content(file_id, content).await?;
        info!(file_id = %file_id, bytes = content.len(), "File content updated");
        Ok(file)
    }

    /// Deletes a single file. The parameter type locks the kind, so a
    /// folder identifier cannot reach this operation.
    pub async fn delete_file(&self, file_id: FileId) -> AppResult<()> {
        let deleted = self.file_repo.delete(file_id).await?;
        if !deleted {
            return Err(AppError::not_found(format!("File {file_id} not found")));
        }
        info!(file_id = %file_id, "File deleted");
        Ok(())
    }
}
