//! Rename and move operations over items of either kind.

use std::sync::Arc;

use tracing::info;

use arbor_core::error::AppError;
use arbor_core::result::AppResult;
use arbor_core::types::{FolderId, NodeId};
use arbor_database::repositories::edge::EdgeRepository;
use arbor_database::repositories::file::FileRepository;
use arbor_database::repositories::folder::FolderRepository;

/// Manages rename and reparenting of folders and files.
#[derive(Debug, Clone)]
pub struct ItemService {
    /// Folder repository.
    folder_repo: Arc<FolderRepository>,
    /// File repository.
    file_repo: Arc<FileRepository>,
    /// Containment-edge repository.
    edge_repo: Arc<EdgeRepository>,
}

impl ItemService {
    /// Creates a new item service.
    pub fn new(
        folder_repo: Arc<FolderRepository>,
        file_repo: Arc<FileRepository>,
        edge_repo: Arc<EdgeRepository>,
    ) -> Self {
        Self {
            folder_repo,
            file_repo,
            edge_repo,
        }
    }

    /// Renames an item. The mutated field follows the kind tag: a folder's
    /// `name`, a file's `title`.
    pub async fn rename_item(&self, item: NodeId, new_name: &str) -> AppResult<()> {
        if new_name.trim().is_empty() {
            return Err(AppError::invalid_argument("Name cannot be empty"));
        }
        if new_name.chars().count() > 255 {
            return Err(AppError::invalid_argument(
                "Name cannot exceed 255 characters",
            ));
        }

        match item {
            NodeId::Folder(id) => {
                self.folder_repo.rename(id, new_name).await?;
            }
            NodeId::File(id) => {
                self.file_repo.rename(id, new_name).await?;
            }
        }

        info!(item_id = %item, new_name = %new_name, "Item renamed");
        Ok(())
    }

    /// Moves an item under a new parent folder, rewiring its containment
    /// edge in one transaction.
    ///
    /// The destination must be a folder (the parameter type enforces this)
    /// and both endpoints must exist, so a dangling edge can never be
    /// created. Moving a folder into itself or into one of its own
    /// descendants is rejected: the folder graph must stay acyclic.
    pub async fn move_item(&self, item: NodeId, new_parent_id: FolderId) -> AppResult<()> {
        self.folder_repo
            .find_by_id(new_parent_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Destination folder {new_parent_id} not found"))
            })?;

        match item {
            NodeId::Folder(folder_id) => {
                self.folder_repo
                    .find_by_id(folder_id)
                    .await?
                    .ok_or_else(|| AppError::not_found(format!("Folder {folder_id} not found")))?;

                if folder_id == new_parent_id {
                    return Err(AppError::invalid_argument(
                        "Cannot move a folder into itself",
                    ));
                }

                let ancestors = self.folder_repo.find_ancestor_ids(new_parent_id).await?;
                if ancestors.contains(folder_id.as_uuid()) {
                    return Err(AppError::invalid_argument(
                        "Cannot move a folder into one of its descendants",
                    ));
                }
            }
            NodeId::File(file_id) => {
                self.file_repo
                    .find_by_id(file_id)
                    .await?
                    .ok_or_else(|| AppError::not_found(format!("File {file_id} not found")))?;
            }
        }

        self.edge_repo.reattach(item, new_parent_id).await?;

        info!(item_id = %item, new_parent_id = %new_parent_id, "Item moved");
        Ok(())
    }
}
