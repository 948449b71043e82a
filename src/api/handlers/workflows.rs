use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use tracing::{info, warn};

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::api::types::OkResponse;
use crate::model::Workflow;
use crate::validate;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Workflow>>, ApiError> {
    Ok(Json(state.store.list().await?))
}

pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Workflow>, ApiError> {
    state
        .store
        .get(&id)
        .await?
        .map(Json)
        .ok_or_else(ApiError::workflow_not_found)
}

/// Replace the workflow stored under `id` with the request body.
pub async fn put(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Workflow>, JsonRejection>,
) -> Result<Json<OkResponse>, ApiError> {
    let Json(workflow) =
        payload.map_err(|e| ApiError::BadRequest(format!("Invalid workflow payload: {}", e.body_text())))?;

    if workflow.id.is_empty() {
        return Err(ApiError::BadRequest("Invalid workflow payload".into()));
    }
    if workflow.id != id {
        return Err(ApiError::BadRequest(format!(
            "Workflow id `{}` does not match path id `{}`",
            workflow.id, id
        )));
    }

    if let Err(errs) = validate::validate(&workflow) {
        return Err(ApiError::Validation(
            errs.iter().map(ToString::to_string).collect(),
        ));
    }

    for w in validate::warnings(&workflow) {
        warn!(workflow = %id, "{w}");
    }

    let (nodes, edges) = (workflow.nodes.len(), workflow.edges.len());
    state.store.put(&id, workflow).await?;
    info!(workflow = %id, nodes, edges, "saved workflow");

    Ok(Json(OkResponse { ok: true }))
}
