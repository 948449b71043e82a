use axum::Json;
use axum::extract::{Path, State};
use tracing::{info, warn};

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::engine::{self, ExecutionResult};

/// Walk a stored workflow once and return the visited nodes.
pub async fn execute(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ExecutionResult>, ApiError> {
    let workflow = state
        .store
        .get(&id)
        .await?
        .ok_or_else(ApiError::workflow_not_found)?;

    let result = engine::walk(&workflow).inspect_err(|e| {
        warn!(workflow = %id, error = %e, "execution rejected");
    })?;

    info!(
        workflow = %id,
        steps = result.steps.len(),
        cycle = result.truncated_due_to_cycle,
        "executed workflow"
    );

    Ok(Json(result))
}
