//! # arbor-api
//!
//! HTTP API layer for Arbor built on Axum.
//!
//! Provides the REST endpoints for the virtual file system, middleware
//! (CORS, compression, request logging), DTOs, and error mapping. Every
//! identifier crossing this boundary is a canonical `"<kind>:<uuid>"`
//! string; parsing it into the typed identifier is the validation step.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
