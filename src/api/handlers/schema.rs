use axum::Json;

pub async fn get_schema() -> Json<serde_json::Value> {
    Json(crate::schema::workflow_schema())
}
