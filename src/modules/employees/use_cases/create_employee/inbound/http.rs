use axum::{Json, body::Bytes, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::modules::employees::core::employee::{Employee, EmployeeId};
use crate::shared::http::api_error::{ApiError, decode_json_body};
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct CreateEmployeeResponse {
    pub id: EmployeeId,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let employee: Employee = decode_json_body(&body)?;

    // Two critical sections; an id lost between them leaves a gap, nothing more.
    let id = state.store.generate_id().await;
    state.store.create(employee.with_id(id)).await;
    tracing::info!(id, "created employee");

    Ok((StatusCode::CREATED, Json(CreateEmployeeResponse { id })))
}
