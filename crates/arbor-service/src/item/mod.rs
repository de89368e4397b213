//! Operations accepting either node kind.

pub mod service;

pub use service::ItemService;
