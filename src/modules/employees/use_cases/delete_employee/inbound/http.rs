use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shared::http::api_error::{ApiError, employee_id_from_path};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = employee_id_from_path(path)?;

    if !state.store.delete(id).await {
        return Err(ApiError::EmployeeNotFound);
    }
    tracing::info!(id, "deleted employee");
    Ok(StatusCode::OK)
}
