//! # arbor-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for the Arbor containment graph.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
