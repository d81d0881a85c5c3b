use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::IntoResponse,
};

use crate::shared::http::api_error::ApiError;
use crate::shell::state::AppState;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// First value of a repeated query parameter; later ones are ignored.
fn first_value<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

// An absent or empty parameter falls back to its default.
fn parse_param(raw: Option<&str>, default: i64, error: ApiError) -> Result<i64, ApiError> {
    match raw {
        None | Some("") => Ok(default),
        Some(value) => value.parse().map_err(|_| {
            tracing::debug!(value, "rejected pagination parameter");
            error
        }),
    }
}

pub async fn handle(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = query.map_err(|rejection| {
        tracing::debug!(%rejection, "rejected query string");
        ApiError::InvalidQuery
    })?;
    let page = parse_param(first_value(&params, "page"), DEFAULT_PAGE, ApiError::InvalidPage)?;
    let page_size = parse_param(
        first_value(&params, "pageSize"),
        DEFAULT_PAGE_SIZE,
        ApiError::InvalidPageSize,
    )?;
    tracing::info!(page, page_size, "listing employees");

    let employees = state.store.list(page, page_size).await;
    tracing::info!(count = employees.len(), "listed employees");

    Ok(Json(employees))
}
