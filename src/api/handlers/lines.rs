//! Handlers for the `/lines` collection.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use validator::Validate;

use crate::api::dto::line::{LineRequest, LineResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new line.
///
/// # Endpoint
///
/// `POST /lines`
///
/// # Request Body
///
/// ```json
/// { "name": "1호선" }
/// ```
///
/// Responds `201 Created` with the stored line and a `Location` header
/// pointing at it.
///
/// # Errors
///
/// Returns 400 if the name is longer than 255 characters.
pub async fn create_line_handler(
    State(state): State<AppState>,
    Json(payload): Json<LineRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let line = state.line_service.create_line(payload.to_line()).await?;
    let location = format!("/lines/{}", line.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(LineResponse::from(line)),
    ))
}

/// Lists all lines ordered by id.
///
/// # Endpoint
///
/// `GET /lines`
///
/// The body is a top-level JSON array.
pub async fn line_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LineResponse>>, AppError> {
    let lines = state.line_service.list_lines().await?;

    Ok(Json(lines.into_iter().map(LineResponse::from).collect()))
}

/// Fetches a single line.
///
/// # Endpoint
///
/// `GET /lines/{id}`
///
/// # Errors
///
/// Returns 404 if the line does not exist.
pub async fn get_line_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<LineResponse>, AppError> {
    let line = state.line_service.get_line(id).await?;
    Ok(Json(line.into()))
}

/// Renames a line.
///
/// # Endpoint
///
/// `PUT /lines/{id}`
///
/// # Errors
///
/// Returns 400 if the name is longer than 255 characters.
/// Returns 404 if the line does not exist.
pub async fn update_line_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<LineRequest>,
) -> Result<Json<LineResponse>, AppError> {
    payload.validate()?;

    let line = state.line_service.update_line(id, payload.name).await?;
    Ok(Json(line.into()))
}

/// Removes a line.
///
/// # Endpoint
///
/// `DELETE /lines/{id}`
///
/// # Errors
///
/// Returns 404 if the line does not exist.
pub async fn delete_line_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.line_service.delete_line(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
