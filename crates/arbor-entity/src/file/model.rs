//! File entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use arbor_core::types::{FileId, FolderId};

/// A file in the containment hierarchy. Files are always leaves and always
/// have a parent folder.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct File {
    /// Unique file identifier.
    pub id: FileId,
    /// File title (1–255 characters).
    pub title: String,
    /// File content. Defaults to empty.
    pub content: String,
    /// When the file was created. Immutable once set.
    pub created_at: DateTime<Utc>,
    /// When the file was last updated. Equals `created_at` at creation and
    /// is refreshed by every mutation.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFile {
    /// File title.
    pub title: String,
    /// Parent folder. Mandatory; files cannot be roots.
    pub parent_id: FolderId,
    /// Initial content.
    pub content: String,
}
