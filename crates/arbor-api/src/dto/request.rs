//! Request DTOs with validation.
//!
//! Identifier fields arrive as canonical `"<kind>:<uuid>"` strings and are
//! parsed into typed identifiers by the handlers.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Create folder request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFolderRequest {
    /// Folder name.
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    /// Parent folder ID. Omitted for a new root folder.
    pub parent_id: Option<String>,
}

/// Create file request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFileRequest {
    /// File title.
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,
    /// Parent folder ID. Mandatory; files cannot be roots.
    pub parent_id: String,
    /// Initial content. Defaults to empty.
    pub content: Option<String>,
}

/// Update file content request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateFileContentRequest {
    /// New file content.
    pub content: String,
}

/// Rename item request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RenameItemRequest {
    /// New name (folder) or title (file).
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub new_name: String,
}

/// Move item request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveItemRequest {
    /// Destination folder ID.
    pub new_parent_id: String,
}
