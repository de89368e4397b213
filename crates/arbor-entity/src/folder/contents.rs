//! One-level folder contents, partitioned by child kind.

use serde::{Deserialize, Serialize};

use crate::file::File;
use crate::folder::Folder;

/// The direct children of a folder.
///
/// Both collections are empty for a childless folder; a missing folder is a
/// not-found failure at the service layer, never an empty result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderContents {
    /// Child folders, one hop down.
    pub folders: Vec<Folder>,
    /// Child files, one hop down.
    pub files: Vec<File>,
}
