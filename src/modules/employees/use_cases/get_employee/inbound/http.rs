use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::IntoResponse,
};

use crate::shared::http::api_error::{ApiError, employee_id_from_path};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = employee_id_from_path(path)?;

    state
        .store
        .get_by_id(id)
        .await
        .map(Json)
        .ok_or(ApiError::EmployeeNotFound)
}
