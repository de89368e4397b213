//! Containment-edge repository.

use sqlx::PgPool;

use arbor_core::error::{AppError, ErrorKind};
use arbor_core::result::AppResult;
use arbor_core::types::{FolderId, NodeId};

/// Repository for rewiring containment edges.
#[derive(Debug, Clone)]
pub struct EdgeRepository {
    pool: PgPool,
}

impl EdgeRepository {
    /// Create a new edge repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Reparent an item: drop any existing incoming edge and create the new
    /// one as a single transaction. A crash between the two statements can
    /// never leave the item parentless or double-parented.
    pub async fn reattach(&self, item: NodeId, new_parent: FolderId) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Store, "Failed to begin edge rewiring", e)
        })?;

        sqlx::query("DELETE FROM contains WHERE child_id = $1")
            .bind(item.into_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Store, "Failed to remove previous edge", e)
            })?;

        sqlx::query("INSERT INTO contains (parent_id, child_kind, child_id) VALUES ($1, $2, $3)")
            .bind(new_parent)
            .bind(item.kind().as_str())
            .bind(item.into_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Store, "Failed to create new edge", e)
            })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Store, "Failed to commit edge rewiring", e)
        })?;

        Ok(())
    }
}
