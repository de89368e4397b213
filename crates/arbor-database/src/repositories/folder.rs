//! Folder repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use arbor_core::error::{AppError, ErrorKind};
use arbor_core::result::AppResult;
use arbor_core::types::FolderId;
use arbor_entity::folder::{Folder, FolderContents, NewFolder};

/// Counts reported by a cascading subtree deletion.
#[derive(Debug, Clone, Copy)]
pub struct SubtreeRemoval {
    /// Number of folders removed, including the subtree root.
    pub folders: u64,
    /// Number of files removed.
    pub files: u64,
}

/// Repository for folder CRUD and containment-graph queries.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a folder by ID.
    pub async fn find_by_id(&self, id: FolderId) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Store, "Failed to find folder", e))
    }

    /// List root folders: folders with zero incoming containment edges.
    pub async fn find_roots(&self) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT f.* FROM folders f \
             WHERE NOT EXISTS (SELECT 1 FROM contains c WHERE c.child_id = f.id) \
             ORDER BY f.name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Store, "Failed to list root folders", e))
    }

    /// Fetch the direct children of a folder, partitioned by child kind.
    pub async fn find_contents(&self, id: FolderId) -> AppResult<FolderContents> {
        let folders = sqlx::query_as::<_, Folder>(
            "SELECT f.* FROM folders f \
             INNER JOIN contains c ON c.child_id = f.id \
             WHERE c.parent_id = $1 AND c.child_kind = 'folder' \
             ORDER BY f.name ASC",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Store, "Failed to list child folders", e))?;

        let files = sqlx::query_as::<_, arbor_entity::file::File>(
            "SELECT f.* FROM files f \
             INNER JOIN contains c ON c.child_id = f.id \
             WHERE c.parent_id = $1 AND c.child_kind = 'file' \
             ORDER BY f.title ASC",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Store, "Failed to list child files", e))?;

        Ok(FolderContents { folders, files })
    }

    /// Create a new folder, attaching it under its parent when one is given.
    ///
    /// The node insert and the edge insert commit as one transaction so a
    /// partial create can never leave an orphaned node or dangling edge.
    /// Without a parent the new folder is a root by construction.
    pub async fn create(&self, data: &NewFolder) -> AppResult<Folder> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Store, "Failed to begin folder creation", e)
        })?;

        let folder = sqlx::query_as::<_, Folder>(
            "INSERT INTO folders (name) VALUES ($1) RETURNING *",
        )
        .bind(&data.name)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Store, "Failed to create folder", e))?
        .ok_or_else(|| AppError::internal("Store returned no row after folder creation"))?;

        if let Some(parent_id) = data.parent_id {
            sqlx::query(
                "INSERT INTO contains (parent_id, child_kind, child_id) VALUES ($1, 'folder', $2)",
            )
            .bind(parent_id)
            .bind(folder.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Store, "Failed to attach folder to parent", e)
            })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Store, "Failed to commit folder creation", e)
        })?;

        Ok(folder)
    }

    /// Rename a folder.
    pub async fn rename(&self, id: FolderId, new_name: &str) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>("UPDATE folders SET name = $2 WHERE id = $1 RETURNING *")
            .bind(id)
            .bind(new_name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Store, "Failed to rename folder", e))?
            .ok_or_else(|| AppError::not_found(format!("Folder {id} not found")))
    }

    /// Count direct children of either kind.
    pub async fn count_children(&self, id: FolderId) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contains WHERE parent_id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Store, "Failed to count children", e)
            })?;
        Ok(count as u64)
    }

    /// Collect the ancestor chain of a folder, nearest parent first.
    ///
    /// Walks incoming containment edges upward; terminates because the
    /// folder graph is acyclic.
    pub async fn find_ancestor_ids(&self, id: FolderId) -> AppResult<Vec<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            "WITH RECURSIVE ancestors AS ( \
                SELECT c.parent_id FROM contains c WHERE c.child_id = $1 \
                UNION ALL \
                SELECT c.parent_id FROM contains c \
                    INNER JOIN ancestors a ON c.child_id = a.parent_id \
             ) SELECT parent_id FROM ancestors",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Store, "Failed to find ancestors", e))
    }

    /// Delete a single folder and its incoming edge. The caller is
    /// responsible for checking emptiness first.
    pub async fn delete(&self, id: FolderId) -> AppResult<bool> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Store, "Failed to begin folder deletion", e)
        })?;

        sqlx::query("DELETE FROM contains WHERE child_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Store, "Failed to detach folder", e)
            })?;

        let result = sqlx::query("DELETE FROM folders WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Store, "Failed to delete folder", e)
            })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Store, "Failed to commit folder deletion", e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a folder and its entire descendant subtree as one transaction.
    ///
    /// The walk is a recursive query over folder-to-folder containment
    /// edges; files are leaves and are removed by membership in any
    /// collected folder. Either the whole subtree disappears on commit or a
    /// failure rolls the store back unchanged.
    pub async fn delete_subtree(&self, id: FolderId) -> AppResult<SubtreeRemoval> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Store, "Failed to begin subtree deletion", e)
        })?;

        let folder_ids: Vec<Uuid> = sqlx::query_scalar(
            "WITH RECURSIVE subtree AS ( \
                SELECT id FROM folders WHERE id = $1 \
                UNION ALL \
                SELECT f.id FROM folders f \
                    INNER JOIN contains c ON c.child_id = f.id AND c.child_kind = 'folder' \
                    INNER JOIN subtree s ON c.parent_id = s.id \
             ) SELECT id FROM subtree",
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Store, "Failed to collect folder subtree", e)
        })?;

        let files = sqlx::query(
            "DELETE FROM files WHERE id IN ( \
                SELECT child_id FROM contains \
                WHERE parent_id = ANY($1) AND child_kind = 'file')",
        )
        .bind(&folder_ids)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Store, "Failed to delete subtree files", e)
        })?
        .rows_affected();

        sqlx::query("DELETE FROM contains WHERE parent_id = ANY($1) OR child_id = ANY($1)")
            .bind(&folder_ids)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Store, "Failed to delete subtree edges", e)
            })?;

        let folders = sqlx::query("DELETE FROM folders WHERE id = ANY($1)")
            .bind(&folder_ids)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Store, "Failed to delete subtree folders", e)
            })?
            .rows_affected();

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Store, "Failed to commit subtree deletion", e)
        })?;

        Ok(SubtreeRemoval { folders, files })
    }
}
