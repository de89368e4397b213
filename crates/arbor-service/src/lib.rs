//! # arbor-service
//!
//! Business logic service layer for Arbor. Each service orchestrates
//! repositories to implement the hierarchy operations: reads, creates,
//! updates, and deletes over the containment graph.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references. Identifier validation happens
//! before these services are reached: the typed `FolderId`/`FileId`/`NodeId`
//! parameters cannot hold a malformed or wrong-kind identifier.

pub mod file;
pub mod folder;
pub mod item;

pub use file::FileService;
pub use folder::FolderService;
pub use item::ItemService;
