//! API route configuration.

use crate::api::handlers::{
    create_line_handler, delete_line_handler, get_line_handler, line_list_handler,
    update_line_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Line management routes.
///
/// # Endpoints
///
/// - `GET    /lines`        - List lines
/// - `POST   /lines`        - Create a line
/// - `GET    /lines/{id}`   - Fetch a line
/// - `PUT    /lines/{id}`   - Rename a line
/// - `DELETE /lines/{id}`   - Remove a line
pub fn line_routes() -> Router<AppState> {
    Router::new()
        .route("/lines", get(line_list_handler).post(create_line_handler))
        .route(
            "/lines/{id}",
            get(get_line_handler)
                .put(update_line_handler)
                .delete(delete_line_handler),
        )
}
