//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LineService;
use crate::domain::repositories::LineRepository;

/// Services shared across requests.
///
/// Cloning is cheap: every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub line_service: Arc<LineService<dyn LineRepository>>,
}

impl AppState {
    /// Builds the state around the given line store.
    pub fn new(repository: Arc<dyn LineRepository>) -> Self {
        Self {
            line_service: Arc::new(LineService::new(repository)),
        }
    }
}
