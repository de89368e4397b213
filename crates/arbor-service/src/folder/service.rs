//! Folder read, create, and delete operations.

use std::sync::Arc;

use tracing::{debug, info};

use arbor_core::error::AppError;
use arbor_core::result::AppResult;
use arbor_core::types::FolderId;
use arbor_database::repositories::folder::FolderRepository;
use arbor_entity::folder::{Folder, FolderContents, NewFolder};

/// Manages folder CRUD and subtree deletion.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Folder repository.
    folder_repo: Arc<FolderRepository>,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(folder_repo: Arc<FolderRepository>) -> Self {
        Self { folder_repo }
    }

    /// Lists all root folders (zero incoming containment edges). Order is
    /// not contractually meaningful.
    pub async fn list_root_folders(&self) -> AppResult<Vec<Folder>> {
        let roots = self.folder_repo.find_roots().await?;
        debug!(count = roots.len(), "Listed root folders");
        Ok(roots)
    }

    /// Gets a folder by ID, failing with not-found when it does not exist.
    pub async fn get_folder(&self, folder_id: FolderId) -> AppResult<Folder> {
        self.folder_repo
            .find_by_id(folder_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Folder {folder_id} not found")))
    }

    /// Lists the direct children of a folder, partitioned by kind.
    ///
    /// A missing folder is not-found; an existing folder with no children
    /// yields two empty collections.
    pub async fn get_folder_contents(&self, folder_id: FolderId) -> AppResult<FolderContents> {
        self.get_folder(folder_id).await?;
        self.folder_repo.find_contents(folder_id).await
    }

    /// Creates a new folder, attached under `parent_id` when given and a
    /// root otherwise.
    pub async fn create_folder(
        &self,
        name: &str,
        parent_id: Option<FolderId>,
    ) -> AppResult<Folder> {
        if name.trim().is_empty() {
            return Err(AppError::invalid_argument("Folder name cannot be empty"));
        }
        if name.chars().count() > 255 {
            return Err(AppError::invalid_argument(
                "Folder name cannot exceed 255 characters",
            ));
        }

        let folder = self
            .folder_repo
            .create(&NewFolder {
                name: name.to_string(),
                parent_id,
            })
            .await?;

        info!(
            folder_id = %folder.id,
            parent_id = ?parent_id.map(|p| p.to_string()),
            "Folder created"
        );

        Ok(folder)
    }

    /// Deletes a single empty folder.
    ///
    /// A folder with any child is rejected; subtree removal must be
    /// requested explicitly via [`Self::delete_folder_and_contents`].
    pub async fn delete_folder(&self, folder_id: FolderId) -> AppResult<()> {
        self.get_folder(folder_id).await?;

        let children = self.folder_repo.count_children(folder_id).await?;
        if children > 0 {
            return Err(AppError::invalid_argument(format!(
                "Folder {folder_id} is not empty; delete its contents explicitly"
            )));
        }

        self.folder_repo.delete(folder_id).await?;
        info!(folder_id = %folder_id, "Folder deleted");
        Ok(())
    }

    /// Deletes a folder and its entire descendant subtree atomically.
    pub async fn delete_folder_and_contents(&self, folder_id: FolderId) -> AppResult<()> {
        self.get_folder(folder_id).await?;

        let removed = self.folder_repo.delete_subtree(folder_id).await?;
        info!(
            folder_id = %folder_id,
            folders = removed.folders,
            files = removed.files,
            "Folder subtree deleted"
        );
        Ok(())
    }
}
