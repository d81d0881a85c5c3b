use axum::{
    body::Bytes,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::employees::core::employee::Employee;
use crate::shared::http::api_error::{ApiError, decode_json_body, employee_id_from_path};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let id = employee_id_from_path(path)?;
    let employee: Employee = decode_json_body(&body)?;

    if !state.store.update(id, employee).await {
        return Err(ApiError::EmployeeNotFound);
    }
    tracing::info!(id, "updated employee");
    Ok(StatusCode::OK)
}
