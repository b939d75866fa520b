//! PostgreSQL implementation of line repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Line, NewLine};
use crate::domain::repositories::LineRepository;
use crate::error::AppError;

/// PostgreSQL repository for lines.
///
/// Uses SQLx prepared statements; ids come from the `BIGSERIAL` column so they
/// are never reused after a delete.
pub struct PgLineRepository {
    pool: Arc<PgPool>,
}

impl PgLineRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LineRepository for PgLineRepository {
    async fn create(&self, new_line: NewLine) -> Result<Line, AppError> {
        let line = sqlx::query_as::<_, Line>(
            r#"
            INSERT INTO lines (name)
            VALUES ($1)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(new_line.name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(line)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Line>, AppError> {
        let line = sqlx::query_as::<_, Line>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM lines
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(line)
    }

    async fn list(&self) -> Result<Vec<Line>, AppError> {
        let lines = sqlx::query_as::<_, Line>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM lines
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(lines)
    }

    async fn update(&self, id: i64, name: String) -> Result<Line, AppError> {
        let line = sqlx::query_as::<_, Line>(
            r#"
            UPDATE lines SET
                name       = $2,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        line.ok_or_else(|| AppError::not_found("Line not found", json!({"id": id})))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM lines WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Line not found", json!({"id": id})));
        }

        Ok(())
    }

    async fn ping(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
