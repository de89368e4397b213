//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use arbor_core::types::FolderId;

/// A folder in the containment hierarchy.
///
/// A folder with no incoming containment edge is a root; nothing else
/// distinguishes roots, and several may coexist.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: FolderId,
    /// Folder name (1–255 characters).
    pub name: String,
    /// Whether the folder is expanded in the explorer UI.
    pub is_open: bool,
    /// When the folder was created. Immutable once set.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFolder {
    /// Folder name.
    pub name: String,
    /// Parent folder (None creates a root).
    pub parent_id: Option<FolderId>,
}
