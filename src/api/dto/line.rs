//! DTOs for the `/lines` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Line, NewLine};

/// Request body for `POST /lines` and `PUT /lines/{id}`.
///
/// Only the length is checked; empty and duplicate names are accepted.
#[derive(Debug, Deserialize, Validate)]
pub struct LineRequest {
    #[validate(length(max = 255, message = "Line name must be at most 255 characters"))]
    pub name: String,
}

impl LineRequest {
    /// Builds the creation input for a new line from this request.
    pub fn to_line(self) -> NewLine {
        NewLine::new(self.name)
    }
}

/// JSON representation of a stored line.
#[derive(Debug, Serialize)]
pub struct LineResponse {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Line> for LineResponse {
    fn from(line: Line) -> Self {
        Self {
            id: line.id,
            name: line.name,
            created_at: line.created_at,
            updated_at: line.updated_at,
        }
    }
}
