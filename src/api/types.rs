use serde::Serialize;

// ── Response types ───────────────────────────────────────────────────

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct OkResponse {
    pub ok: bool,
}
