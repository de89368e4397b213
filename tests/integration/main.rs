//! Integration tests for the Arbor HTTP surface.
//!
//! These run against a live PostgreSQL instance configured by
//! `config/test.toml` (overridable via `ARBOR__DATABASE__URL`).

mod helpers;

mod file_test;
mod hierarchy_test;
