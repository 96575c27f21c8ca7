//! Shared test infrastructure
//!
//! Containerized MySQL for integration tests. Tests that use this crate
//! need a running Docker daemon and are marked `#[ignore]` accordingly.

pub mod mysql;

pub use mysql::TestDatabase;
