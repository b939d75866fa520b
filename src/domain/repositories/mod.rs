//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`; mock
//! implementations are generated via `mockall` for unit tests.

pub mod line_repository;

pub use line_repository::LineRepository;

#[cfg(test)]
pub use line_repository::MockLineRepository;
