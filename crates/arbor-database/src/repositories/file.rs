//! File repository implementation.

use sqlx::PgPool;

use arbor_core::error::{AppError, ErrorKind};
use arbor_core::result::AppResult;
use arbor_core::types::FileId;
use arbor_entity::file::{File, NewFile};

/// Repository for file CRUD operations.
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a file by ID.
    pub async fn find_by_id(&self, id: FileId) -> AppResult<Option<File>> {
        sqlx::query_as::<_, File>("SELECT * FROM files WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Store, "Failed to find file", e))
    }

    /// Create a new file under its parent folder.
    ///
    /// The node insert and the edge insert commit as one transaction;
    /// files always have a parent.
    pub async fn create(&self, data: &NewFile) -> AppResult<File> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Store, "Failed to begin file creation", e)
        })?;

        let file = sqlx::query_as::<_, File>(
            "INSERT INTO files (title, content) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.content)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Store, "Failed to create file", e))?
        .ok_or_else(|| AppError::internal("Store returned no row after file creation"))?;

        sqlx::query(
            "INSERT INTO contains (parent_id, child_kind, child_id) VALUES ($1, 'file', $2)",
        )
        .bind(data.parent_id)
        .bind(file.id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Store, "Failed to attach file to parent", e)
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Store, "Failed to commit file creation", e)
        })?;

        Ok(file)
    }

    /// Replace a file's content, refreshing `updated_at`.
    pub async fn update_content(&self, id: FileId, content: &str) -> AppResult<File> {
        sqlx::query_as::<_, File>(
            "UPDATE files SET content = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(content)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Store, "Failed to update file content", e))?
        .ok_or_else(|| AppError::not_found(format!("File {id} not found")))
    }

    /// Rename a file, refreshing `updated_at`.
    pub async fn rename(&self, id: FileId, new_title: &str) -> AppResult<File> {
        sqlx::query_as::<_, File>(
            "UPDATE files SET title = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(new_title)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Store, "Failed to rename file", e))?
        .ok_or_else(|| AppError::not_found(format!("File {id} not found")))
    }

    /// Delete a file and its incoming edge as one transaction, so no edge
    /// is ever left referencing a removed node.
    pub async fn delete(&self, id: FileId) -> AppResult<bool> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Store, "Failed to begin file deletion", e)
        })?;

        sqlx::query("DELETE FROM contains WHERE child_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Store, "Failed to detach file", e))?;

        let result = sqlx::query("DELETE FROM files WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Store, "Failed to delete file", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Store, "Failed to commit file deletion", e)
        })?;

        Ok(result.rows_affected() > 0)
    }
}
