use axum::{
    Json,
    extract::{Path, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::modules::employees::core::employee::EmployeeId;

/// Request failures surfaced to HTTP clients as `{"error": "<message>"}`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Invalid page number")]
    InvalidPage,

    #[error("Invalid page size")]
    InvalidPageSize,

    #[error("Invalid query string")]
    InvalidQuery,

    #[error("Invalid employee ID")]
    InvalidEmployeeId,

    #[error("Invalid request body")]
    InvalidRequestBody,

    #[error("Employee does not exist")]
    EmployeeNotFound,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::EmployeeNotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidPage
            | ApiError::InvalidPageSize
            | ApiError::InvalidQuery
            | ApiError::InvalidEmployeeId
            | ApiError::InvalidRequestBody => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Parses an `{id}` path segment.
pub fn parse_employee_id(raw: &str) -> Result<EmployeeId, ApiError> {
    raw.parse().map_err(|_| {
        tracing::debug!(raw, "rejected employee id");
        ApiError::InvalidEmployeeId
    })
}

/// Resolves the `{id}` path segment, including segments axum could not decode.
pub fn employee_id_from_path(
    path: Result<Path<String>, PathRejection>,
) -> Result<EmployeeId, ApiError> {
    let Path(raw) = path.map_err(|rejection| {
        tracing::debug!(%rejection, "rejected employee id path");
        ApiError::InvalidEmployeeId
    })?;
    parse_employee_id(&raw)
}

/// Decodes a JSON request body regardless of its declared content type.
pub fn decode_json_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|error| {
        tracing::warn!(%error, "rejected request body");
        ApiError::InvalidRequestBody
    })
}
