//! Repository trait for subway lines.

use crate::domain::entities::{Line, NewLine};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for storing lines.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLineRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryLineRepository`] - In-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LineRepository: Send + Sync {
    /// Stores a new line and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_line: NewLine) -> Result<Line, AppError>;

    /// Finds a line by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Line>, AppError>;

    /// Lists all lines ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self) -> Result<Vec<Line>, AppError>;

    /// Renames an existing line.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the line does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update(&self, id: i64, name: String) -> Result<Line, AppError>;

    /// Removes a line.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the line does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Returns true if the backing store is reachable.
    async fn ping(&self) -> bool;
}
