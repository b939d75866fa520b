//! Line entity representing a named subway line.

use chrono::{DateTime, Utc};

/// A subway line with an auto-assigned id.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Line {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Line {
    /// Creates a new Line instance.
    pub fn new(id: i64, name: String, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at,
            updated_at,
        }
    }

    /// Renames the line and bumps `updated_at`.
    pub fn rename(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }
}

/// Input data for creating a new line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLine {
    pub name: String,
}

impl NewLine {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
