//! Subway line management service.

use crate::domain::entities::{Line, NewLine};
use crate::domain::repositories::LineRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Service for creating, reading, renaming and removing lines.
///
/// Works against any [`LineRepository`]; the server wires it to
/// `dyn LineRepository` so the store can be chosen at startup.
pub struct LineService<R: LineRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: LineRepository + ?Sized> LineService<R> {
    /// Creates a new line service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a new line.
    ///
    /// Names are taken as-is: empty and duplicate names are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_line(&self, new_line: NewLine) -> Result<Line, AppError> {
        let line = self.repository.create(new_line).await?;
        info!(id = line.id, name = %line.name, "Line created");
        Ok(line)
    }

    /// Lists all lines ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_lines(&self) -> Result<Vec<Line>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a line by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the line does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_line(&self, id: i64) -> Result<Line, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Line not found", json!({"id": id})))
    }

    /// Renames an existing line.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the line does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update_line(&self, id: i64, name: String) -> Result<Line, AppError> {
        let line = self.repository.update(id, name).await?;
        info!(id = line.id, name = %line.name, "Line updated");
        Ok(line)
    }

    /// Removes a line.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the line does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete_line(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        info!(id, "Line deleted");
        Ok(())
    }

    /// Returns true if the backing store answers.
    pub async fn health_check(&self) -> bool {
        self.repository.ping().await
    }
}
