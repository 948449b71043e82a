use axum::Json;
use axum::extract::{Path, State};

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::validate::{self, Report};

/// Check a stored workflow. Warnings never make it invalid.
pub async fn validate_workflow(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Report>, ApiError> {
    let workflow = state
        .store
        .get(&id)
        .await?
        .ok_or_else(ApiError::workflow_not_found)?;

    Ok(Json(validate::report(&workflow)))
}
