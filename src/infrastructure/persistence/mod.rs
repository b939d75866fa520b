//! Line repository implementations.
//!
//! - [`PgLineRepository`] - PostgreSQL storage via SQLx
//! - [`MemoryLineRepository`] - In-process storage used when no database is configured

pub mod memory_line_repository;
pub mod pg_line_repository;

pub use memory_line_repository::MemoryLineRepository;
pub use pg_line_repository::PgLineRepository;
