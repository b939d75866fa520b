//! In-process line repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Line, NewLine};
use crate::domain::repositories::LineRepository;
use crate::error::AppError;

/// A line store kept entirely in memory.
///
/// Used when no database is configured and by the HTTP tests. Contents are
/// lost when the process exits.
pub struct MemoryLineRepository {
    inner: RwLock<Store>,
}

#[derive(Default)]
struct Store {
    lines: BTreeMap<i64, Line>,
    last_id: i64,
}

impl MemoryLineRepository {
    /// Creates an empty store. The first line gets id 1.
    pub fn new() -> Self {
        debug!("Using in-memory line store");
        Self {
            inner: RwLock::new(Store::default()),
        }
    }
}

impl Default for MemoryLineRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LineRepository for MemoryLineRepository {
    async fn create(&self, new_line: NewLine) -> Result<Line, AppError> {
        let mut store = self.inner.write().await;
        store.last_id += 1;

        let now = Utc::now();
        let line = Line::new(store.last_id, new_line.name, now, now);
        store.lines.insert(line.id, line.clone());

        Ok(line)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Line>, AppError> {
        Ok(self.inner.read().await.lines.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Line>, AppError> {
        Ok(self.inner.read().await.lines.values().cloned().collect())
    }

    async fn update(&self, id: i64, name: String) -> Result<Line, AppError> {
        let mut store = self.inner.write().await;
        let line = store
            .lines
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Line not found", json!({"id": id})))?;

        line.rename(name);
        Ok(line.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.inner
            .write()
            .await
            .lines
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("Line not found", json!({"id": id})))
    }

    async fn ping(&self) -> bool {
        true
    }
}
